use crate::error::EventError;
use crate::event::ItemRecord;

/// Number of carried items per weapon class. Classes that are not carried
/// have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct WeaponCounts(std::collections::HashMap<String, usize>);

impl WeaponCounts {
    pub fn get(&self, class: &str) -> usize {
        self.0.get(class).copied().unwrap_or(0)
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.contains_key(class)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(class, count)| (class.as_str(), *count))
    }
}

impl<'s> FromIterator<(&'s str, usize)> for WeaponCounts {
    fn from_iter<T: IntoIterator<Item = (&'s str, usize)>>(iter: T) -> Self {
        let mut counts = std::collections::HashMap::new();
        for (class, count) in iter {
            *counts.entry(class.to_owned()).or_default() += count;
        }
        Self(counts)
    }
}

/// The classes a question is interested in, e.g. `Rifle` and `SMG`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WeaponClasses(std::collections::BTreeSet<String>);

impl WeaponClasses {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|c| c.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S> FromIterator<S> for WeaponClasses
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Tallies the weapon classes of an inventory.
///
/// A missing inventory stays missing, it is not the same as an empty one.
pub fn extract(inventory: Option<&[ItemRecord]>) -> Result<Option<WeaponCounts>, EventError> {
    let inventory = match inventory {
        Some(i) => i,
        None => return Ok(None),
    };

    let mut counts = std::collections::HashMap::<String, usize>::new();
    for (item, record) in inventory.iter().enumerate() {
        let class = record
            .weapon_class
            .as_ref()
            .ok_or(EventError::MissingWeaponClass { item })?;

        *counts.entry(class.clone()).or_default() += 1;
    }

    Ok(Some(WeaponCounts(counts)))
}

/// Total number of weapons in any of the given classes. Unknown inventories
/// count as carrying nothing.
pub fn count(counts: Option<&WeaponCounts>, classes: &WeaponClasses) -> usize {
    match counts {
        Some(counts) => classes.iter().map(|class| counts.get(class)).sum(),
        None => 0,
    }
}
