use crate::error::{Axis, EventError};
use crate::geometry::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Side {
    T,
    CT,
}

pub static SIDE_LABELS: phf::Map<&'static str, Side> = phf::phf_map! {
    "T" => Side::T,
    "TERRORIST" => Side::T,
    "CT" => Side::CT,
    "COUNTERTERRORIST" => Side::CT,
    "COUNTER-TERRORIST" => Side::CT,
};

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Self::T => "T",
            Self::CT => "CT",
        }
    }
}

impl core::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SIDE_LABELS
            .get(s.trim().to_ascii_uppercase().as_str())
            .copied()
            .ok_or_else(|| format!("Unknown side: {:?}", s))
    }
}

impl TryFrom<String> for Side {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Side> for &'static str {
    fn from(value: Side) -> Self {
        value.label()
    }
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Coordinate as found in a snapshot row, either a number or a numeric string.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    /// Truncates toward zero, `-12.9` becomes `-12`.
    pub fn truncate(&self, axis: Axis) -> Result<i64, EventError> {
        let malformed = || EventError::MalformedCoordinate {
            axis,
            value: self.to_string(),
        };

        let value = match self {
            Self::Number(v) => *v,
            Self::Text(s) => s.trim().parse::<f64>().map_err(|_| malformed())?,
        };

        let truncated = value.trunc();
        if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
            return Err(malformed());
        }

        Ok(truncated as i64)
    }
}

impl From<f64> for Coordinate {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Coordinate {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl core::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct ItemRecord {
    #[serde(default)]
    pub weapon_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_name: Option<String>,
}

impl ItemRecord {
    pub fn of_class(class: &str) -> Self {
        Self {
            weapon_class: Some(class.to_owned()),
            weapon_name: None,
        }
    }
}

/// One observation of one player at one instant of a round.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    pub player: String,
    pub team: String,
    pub side: Side,
    pub round_num: u32,
    pub area_name: String,
    pub x: Coordinate,
    pub y: Coordinate,
    pub z: Coordinate,
    pub clock_time: String,
    #[serde(default)]
    pub inventory: Option<Vec<ItemRecord>>,
}

impl Event {
    pub fn position(&self) -> Result<Position, EventError> {
        Ok(Position {
            x: self.x.truncate(Axis::X)?,
            y: self.y.truncate(Axis::Y)?,
            z: self.z.truncate(Axis::Z)?,
        })
    }
}

/// Row selection on team, side and zone label. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub team: Option<String>,
    pub side: Option<Side>,
    pub area_name: Option<String>,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    pub fn area(mut self, area_name: impl Into<String>) -> Self {
        self.area_name = Some(area_name.into());
        self
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.team.as_ref().map(|t| *t == event.team).unwrap_or(true)
            && self.side.map(|s| s == event.side).unwrap_or(true)
            && self
                .area_name
                .as_ref()
                .map(|a| *a == event.area_name)
                .unwrap_or(true)
    }

    pub fn apply<'a, 'e: 'a>(&'a self, events: &'e [Event]) -> impl Iterator<Item = &'e Event> + 'a {
        events.iter().filter(move |e| self.matches(e))
    }
}
