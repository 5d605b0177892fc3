use analysis::annotate::{self, Batch};
use analysis::event::{Coordinate, Event, ItemRecord, Side};
use analysis::geometry::{Boundary, HeightBand, Vertex, Zone};

fn main() {
    divan::main();
}

fn config() -> annotate::Config {
    let boundary = Boundary::new(
        [
            (-1735.0, 250.0),
            (-2024.0, 398.0),
            (-2806.0, 742.0),
            (-2472.0, 1233.0),
            (-1565.0, 580.0),
        ]
        .into_iter()
        .map(Vertex::from)
        .collect(),
    )
    .unwrap();

    annotate::Config {
        zone: Zone::new(boundary, HeightBand::DEFAULT),
        weapon_classes: ["Rifle", "SMG"].into_iter().collect(),
    }
}

/// Rows spread over a grid around the route, ten players over thirty rounds.
fn events(n: usize) -> Vec<Event> {
    (0..n)
        .map(|i| Event {
            player: format!("Player{}", i % 10),
            team: "Team2".to_owned(),
            side: Side::T,
            round_num: (i / 10 % 30) as u32,
            area_name: if i % 3 == 0 { "BombsiteB" } else { "TopofMid" }.to_owned(),
            x: Coordinate::from(-3000.0 + (i % 200) as f64 * 9.0),
            y: Coordinate::from(100.0 + (i % 150) as f64 * 8.0),
            z: Coordinate::from(250.0 + (i % 200) as f64),
            clock_time: format!("{}:{:02}", i % 2, i % 60),
            inventory: Some(vec![ItemRecord::of_class("Rifle"), ItemRecord::of_class("Pistols")]),
        })
        .collect()
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn annotate_batch(bencher: divan::Bencher, n: usize) {
    let config = config();
    let events = events(n);

    bencher.bench(|| Batch::annotate(divan::black_box(&config), divan::black_box(&events)));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn majority_tally(bencher: divan::Bencher, n: usize) {
    let config = config();
    let events = events(n);
    let batch = Batch::annotate(&config, &events);

    bencher.bench(|| analysis::aggregate::majority_tally(divan::black_box(&batch.events)));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn average_latest_clock(bencher: divan::Bencher, n: usize) {
    let config = config();
    let events = events(n);
    let batch = Batch::annotate(&config, &events);

    bencher.bench(|| {
        analysis::aggregate::average_latest_clock(
            divan::black_box(&batch.events),
            analysis::aggregate::armed_in_area("BombsiteB", 1),
        )
    });
}
