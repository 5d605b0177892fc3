use chrono::Timelike;

use crate::error::ClockError;

const FORMAT: &str = "%H:%M";

/// Round timer reading, kept as a time of day.
///
/// `0:45` reads as `00:45`. Values are ordered as times, so `10:05` sorts
/// after `9:59`, unlike the raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(chrono::NaiveTime);

impl ClockTime {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        chrono::NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn as_time(&self) -> chrono::NaiveTime {
        self.0
    }

    /// Arithmetic mean of the times of day. `None` for no values.
    pub fn mean<I>(times: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let (total, n) = times.into_iter().fold((0u64, 0u64), |(total, n), t| {
            (total + t.0.num_seconds_from_midnight() as u64, n + 1)
        });

        if n == 0 {
            return None;
        }

        chrono::NaiveTime::from_num_seconds_from_midnight_opt((total / n) as u32, 0).map(Self)
    }
}

impl core::str::FromStr for ClockTime {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        chrono::NaiveTime::parse_from_str(s.trim(), FORMAT)
            .map(Self)
            .map_err(|_| ClockError::Ambiguous {
                value: s.to_owned(),
            })
    }
}

impl core::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl serde::Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
