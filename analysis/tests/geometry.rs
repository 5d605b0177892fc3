use analysis::error::BoundaryError;
use analysis::geometry::{classify, Boundary, HeightBand, Position, Vertex, Zone};
use pretty_assertions::assert_eq;

fn boundary(points: &[(f64, f64)]) -> Boundary {
    Boundary::new(points.iter().copied().map(Vertex::from).collect()).unwrap()
}

fn at(x: i64, y: i64, z: i64) -> Position {
    Position { x, y, z }
}

fn light_blue() -> Boundary {
    boundary(&[
        (-1735.0, 250.0),
        (-2024.0, 398.0),
        (-2806.0, 742.0),
        (-2472.0, 1233.0),
        (-1565.0, 580.0),
    ])
}

const SQUARE: [(f64, f64); 4] = [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)];

#[test]
fn too_few_vertices() {
    let result = Boundary::new(vec![Vertex::from((0.0, 0.0)), Vertex::from((1.0, 1.0))]);
    assert_eq!(Err(BoundaryError::TooFewVertices { count: 2 }), result);
}

#[test]
fn repeated_vertex_is_degenerate() {
    let result = Boundary::new(
        [(0.0, 0.0), (10.0, 0.0), (10.0, 0.0), (0.0, 10.0)]
            .into_iter()
            .map(Vertex::from)
            .collect(),
    );
    assert_eq!(Err(BoundaryError::DegenerateEdge { index: 1 }), result);

    let closing = Boundary::new(
        [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (0.0, 0.0)]
            .into_iter()
            .map(Vertex::from)
            .collect(),
    );
    assert_eq!(Err(BoundaryError::DegenerateEdge { index: 3 }), closing);
}

#[test]
fn inside_square() {
    let square = boundary(&SQUARE);
    assert!(classify(at(50, 50, 300), &square, HeightBand::DEFAULT));
    assert!(classify(at(1, 99, 300), &square, HeightBand::DEFAULT));
}

#[test]
fn outside_bounding_box() {
    let square = boundary(&SQUARE);
    for (x, y) in [(-1, 50), (101, 50), (50, -1), (50, 101), (500, 500), (-500, -500)] {
        assert!(!classify(at(x, y, 300), &square, HeightBand::DEFAULT), "({}, {})", x, y);
    }

    let route = light_blue();
    assert!(!classify(at(-1000, 800, 300), &route, HeightBand::DEFAULT));
    assert!(!classify(at(-3000, 800, 300), &route, HeightBand::DEFAULT));
}

#[test]
fn rotation_invariant() {
    let points = [(50, 50), (10, 90), (99, 1), (150, 50), (50, -20)];

    for start in 0..SQUARE.len() {
        let mut rotated = SQUARE.to_vec();
        rotated.rotate_left(start);
        let rotated = boundary(&rotated);
        let square = boundary(&SQUARE);

        for (x, y) in points {
            assert_eq!(
                classify(at(x, y, 300), &square, HeightBand::DEFAULT),
                classify(at(x, y, 300), &rotated, HeightBand::DEFAULT),
                "start {} point ({}, {})",
                start,
                x,
                y
            );
        }
    }
}

#[test]
fn height_band_dominates() {
    let square = boundary(&SQUARE);
    assert!(!classify(at(50, 50, 284), &square, HeightBand::DEFAULT));
    assert!(!classify(at(50, 50, 422), &square, HeightBand::DEFAULT));
    assert!(classify(at(50, 50, 285), &square, HeightBand::DEFAULT));
    assert!(classify(at(50, 50, 421), &square, HeightBand::DEFAULT));

    let band = HeightBand { min: -10.0, max: 10.0 };
    assert!(classify(at(50, 50, 0), &square, band));
    assert!(!classify(at(50, 50, 300), &square, band));
}

#[test]
fn non_convex_boundary() {
    // U shape, open towards +y
    let u = boundary(&[
        (0.0, 0.0),
        (30.0, 0.0),
        (30.0, 30.0),
        (20.0, 30.0),
        (20.0, 10.0),
        (10.0, 10.0),
        (10.0, 30.0),
        (0.0, 30.0),
    ]);

    assert!(u.contains_xy(5, 20));
    assert!(u.contains_xy(25, 20));
    assert!(u.contains_xy(15, 5));
    assert!(!u.contains_xy(15, 20));
}

#[test]
fn light_blue_route() {
    let route = light_blue();
    assert!(route.contains_xy(-2200, 600));
    assert!(route.contains_xy(-2400, 1000));
    assert!(!route.contains_xy(-1600, 300));
}

#[test]
fn horizontal_edges_count_as_outside() {
    let square = boundary(&SQUARE);
    assert!(!square.contains_xy(50, 0));
    assert!(!square.contains_xy(50, 100));
    assert!(!square.contains_xy(0, 0));
}

#[test]
fn zone_from_json() {
    let zone: Zone = serde_json::from_str(r#"{"boundary": [[0, 0], [10, 0], [10, 10]]}"#).unwrap();
    assert_eq!(HeightBand::DEFAULT, zone.band);
    assert_eq!(3, zone.boundary.vertices().len());

    let invalid = serde_json::from_str::<Zone>(r#"{"boundary": [[0, 0], [10, 0]]}"#);
    assert!(invalid.is_err());
}

#[test]
fn non_finite_vertex() {
    let result = Boundary::new(
        [(0.0, 0.0), (f64::NAN, 0.0), (0.0, 10.0)]
            .into_iter()
            .map(Vertex::from)
            .collect(),
    );
    assert_eq!(Err(BoundaryError::NonFiniteVertex { index: 1 }), result);

    let result = Boundary::new(
        [(0.0, 0.0), (10.0, 0.0), (0.0, f64::INFINITY)]
            .into_iter()
            .map(Vertex::from)
            .collect(),
    );
    assert_eq!(Err(BoundaryError::NonFiniteVertex { index: 2 }), result);
}
