use crate::clock::ClockTime;
use crate::error::{EventError, RowError};
use crate::event::Event;
use crate::geometry::{Position, Zone};
use crate::inventory::{self, WeaponClasses, WeaponCounts};

pub struct Config {
    pub zone: Zone,
    pub weapon_classes: WeaponClasses,
}

/// A source row together with the values derived from it. The source row is
/// borrowed, never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedEvent<'e> {
    pub event: &'e Event,
    pub position: Position,
    pub clock: ClockTime,
    pub in_zone: bool,
    pub weapons: Option<WeaponCounts>,
    pub weapons_of_interest: usize,
}

pub fn annotate<'e>(config: &Config, event: &'e Event) -> Result<AnnotatedEvent<'e>, EventError> {
    let position = event.position()?;
    let clock: ClockTime = event.clock_time.parse()?;
    let in_zone = config.zone.contains(position);

    let weapons = inventory::extract(event.inventory.as_deref())?;
    let weapons_of_interest = inventory::count(weapons.as_ref(), &config.weapon_classes);

    Ok(AnnotatedEvent {
        event,
        position,
        clock,
        in_zone,
        weapons,
        weapons_of_interest,
    })
}

/// Annotates every row on its own. The output has exactly one entry per
/// input row, in input order, and a failing row does not affect the others.
#[tracing::instrument(skip(config, events))]
pub fn annotate_batch<'e, I>(config: &Config, events: I) -> Vec<Result<AnnotatedEvent<'e>, RowError>>
where
    I: IntoIterator<Item = &'e Event>,
{
    events
        .into_iter()
        .enumerate()
        .map(|(row, event)| annotate(config, event).map_err(|source| RowError { row, source }))
        .collect()
}

/// Annotated rows split from the rows that were rejected.
#[derive(Debug, Default)]
pub struct Batch<'e> {
    pub events: Vec<AnnotatedEvent<'e>>,
    pub rejected: Vec<RowError>,
}

impl<'e> Batch<'e> {
    pub fn annotate<I>(config: &Config, events: I) -> Self
    where
        I: IntoIterator<Item = &'e Event>,
    {
        let mut batch = Self::default();
        for result in annotate_batch(config, events) {
            match result {
                Ok(event) => batch.events.push(event),
                Err(e) => {
                    tracing::warn!(row = e.row, "Skipping row: {}", e.source);
                    batch.rejected.push(e);
                }
            }
        }

        tracing::debug!(
            "Annotated {} rows, rejected {}",
            batch.events.len(),
            batch.rejected.len()
        );

        batch
    }
}
