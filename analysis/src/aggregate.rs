//! Grouping of annotated rows into per player/round summaries.
//!
//! Groups are keyed by `(player, round_num)` and kept in a `BTreeMap` so the
//! summaries come out in a stable order.

use crate::annotate::AnnotatedEvent;
use crate::clock::ClockTime;

pub type PairKey = (String, u32);

fn pair_key(event: &AnnotatedEvent<'_>) -> PairKey {
    (event.event.player.clone(), event.event.round_num)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct PairTally {
    pub inside: usize,
    pub outside: usize,
}

impl PairTally {
    /// Ties count as favoring the zone.
    pub fn favors_inside(&self) -> bool {
        !(self.outside > self.inside)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MajorityTally {
    pub pairs: std::collections::BTreeMap<PairKey, PairTally>,
    pub favoring_inside: usize,
    pub favoring_outside: usize,
}

impl MajorityTally {
    /// Only a strict majority of pairs favoring the outside makes the zone
    /// uncommon.
    pub fn is_common(&self) -> bool {
        !(self.favoring_outside > self.favoring_inside)
    }
}

/// Classifies every (player, round) pair by whether most of its rows were in
/// the zone, then counts the pairs on each side.
#[tracing::instrument(skip(events))]
pub fn majority_tally<'a, 'e: 'a, I>(events: I) -> MajorityTally
where
    I: IntoIterator<Item = &'a AnnotatedEvent<'e>>,
{
    let mut pairs = std::collections::BTreeMap::<PairKey, PairTally>::new();
    for event in events {
        let tally = pairs.entry(pair_key(event)).or_default();
        if event.in_zone {
            tally.inside += 1;
        } else {
            tally.outside += 1;
        }
    }

    let favoring_inside = pairs.values().filter(|t| t.favors_inside()).count();
    let favoring_outside = pairs.len() - favoring_inside;

    tracing::debug!(
        pairs = pairs.len(),
        favoring_inside,
        favoring_outside,
        "Majority tally"
    );

    MajorityTally {
        pairs,
        favoring_inside,
        favoring_outside,
    }
}

/// Result of the filtered time average. No matching rows is a regular answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimingOutcome {
    NoOccurrence,
    Average {
        latest: std::collections::BTreeMap<PairKey, ClockTime>,
        mean: ClockTime,
    },
}

/// Keeps the rows matching `predicate`, takes the latest clock reading of
/// every (player, round) pair and averages those readings. Clock readings
/// were validated during annotation.
#[tracing::instrument(skip(events, predicate))]
pub fn average_latest_clock<'a, 'e: 'a, I, P>(events: I, predicate: P) -> TimingOutcome
where
    I: IntoIterator<Item = &'a AnnotatedEvent<'e>>,
    P: Fn(&AnnotatedEvent<'e>) -> bool,
{
    let mut latest = std::collections::BTreeMap::<PairKey, ClockTime>::new();
    for event in events.into_iter().filter(|e| predicate(e)) {
        latest
            .entry(pair_key(event))
            .and_modify(|current| *current = (*current).max(event.clock))
            .or_insert(event.clock);
    }

    let mean = match ClockTime::mean(latest.values().copied()) {
        Some(m) => m,
        None => {
            tracing::debug!("No rows matched");
            return TimingOutcome::NoOccurrence;
        }
    };

    tracing::debug!(groups = latest.len(), %mean, "Average latest clock");

    TimingOutcome::Average { latest, mean }
}

/// Predicate for rows in `area_name` carrying at least `min_weapons` weapons
/// of the annotated classes.
pub fn armed_in_area<'p>(area_name: &'p str, min_weapons: usize) -> impl Fn(&AnnotatedEvent<'_>) -> bool + 'p {
    move |event| event.event.area_name == area_name && event.weapons_of_interest >= min_weapons
}

/// Horizontal positions of the matching rows, in input order, for binning.
pub fn positions<'a, 'e: 'a, I, P>(events: I, predicate: P) -> Vec<(f64, f64)>
where
    I: IntoIterator<Item = &'a AnnotatedEvent<'e>>,
    P: Fn(&AnnotatedEvent<'e>) -> bool,
{
    events
        .into_iter()
        .filter(|e| predicate(e))
        .map(|e| (e.position.x as f64, e.position.y as f64))
        .collect()
}
