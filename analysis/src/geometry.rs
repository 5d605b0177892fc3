use crate::error::BoundaryError;

/// A vertex of a zone boundary in the horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Vertex {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Vertex> for (f64, f64) {
    fn from(v: Vertex) -> Self {
        (v.x, v.y)
    }
}

/// Player position after truncating every coordinate toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

/// Closed interval on the z axis a position has to lie in before the
/// horizontal boundary is even considered.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeightBand {
    pub min: f64,
    pub max: f64,
}

impl HeightBand {
    pub const DEFAULT: Self = Self {
        min: 285.0,
        max: 421.0,
    };

    pub fn contains(&self, z: i64) -> bool {
        let z = z as f64;
        !(z < self.min || z > self.max)
    }
}

impl Default for HeightBand {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A simple polygon, implicitly closed from the last vertex back to the first.
///
/// Self-intersecting vertex lists are accepted but give meaningless
/// containment results.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Vertex>", into = "Vec<Vertex>")]
pub struct Boundary {
    vertices: Vec<Vertex>,
}

impl Boundary {
    pub fn new(vertices: Vec<Vertex>) -> Result<Self, BoundaryError> {
        if vertices.len() < 3 {
            return Err(BoundaryError::TooFewVertices {
                count: vertices.len(),
            });
        }

        if let Some(index) = vertices.iter().position(|v| !(v.x.is_finite() && v.y.is_finite())) {
            return Err(BoundaryError::NonFiniteVertex { index });
        }

        let boundary = Self { vertices };
        if let Some((index, _)) = boundary.edges().enumerate().find(|(_, (a, b))| a == b) {
            return Err(BoundaryError::DegenerateEdge { index });
        }

        Ok(boundary)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Consecutive vertex pairs followed by the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        let closing = self.vertices.last().copied().zip(self.vertices.first().copied());

        self.vertices
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .chain(closing)
    }

    /// Ray casting towards +x.
    ///
    /// Edges only count when the point's y lies strictly between their end
    /// points, so horizontal edges never count and a ray through a vertex is
    /// not counted twice. Points exactly on the boundary have no guaranteed
    /// answer.
    pub fn contains_xy(&self, x: i64, y: i64) -> bool {
        let (x, y) = (x as f64, y as f64);

        let crossings = self
            .edges()
            .filter(|(a, b)| y > a.y.min(b.y) && y < a.y.max(b.y))
            .filter(|(a, b)| x < a.x.max(b.x))
            .filter(|(a, b)| {
                let intersection = (y - a.y) * (b.x - a.x) / (b.y - a.y) + a.x;
                x < intersection
            })
            .count();

        crossings % 2 == 1
    }
}

impl TryFrom<Vec<Vertex>> for Boundary {
    type Error = BoundaryError;

    fn try_from(value: Vec<Vertex>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Boundary> for Vec<Vertex> {
    fn from(value: Boundary) -> Self {
        value.vertices
    }
}

/// Boundary plus height band, the full region a position is tested against.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Zone {
    pub boundary: Boundary,
    #[serde(default)]
    pub band: HeightBand,
}

impl Zone {
    pub fn new(boundary: Boundary, band: HeightBand) -> Self {
        Self { boundary, band }
    }

    pub fn contains(&self, position: Position) -> bool {
        classify(position, &self.boundary, self.band)
    }
}

/// The height band is checked first, the polygon is only evaluated for
/// positions inside it.
pub fn classify(position: Position, boundary: &Boundary, band: HeightBand) -> bool {
    if !band.contains(position.z) {
        return false;
    }

    boundary.contains_xy(position.x, position.y)
}
