//! Day keys and the day selection used to filter readings.

use chrono::NaiveDate;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Label of the selection that shows every day.
pub const GENERAL: &str = "General";

/// The calendar-date portion (`YYYY-MM-DD`) of a reading's timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(String);

impl DayKey {
    /// Takes everything before the first `T` of an ISO-8601 timestamp.
    pub fn from_timestamp(timestamp: &str) -> Self {
        let date = timestamp
            .split_once('T')
            .map_or(timestamp, |(date, _time)| date);
        Self(date.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key as a calendar date, if it is a valid `YYYY-MM-DD` string.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }
}

impl From<&str> for DayKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DayKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<NaiveDate> for DayKey {
    fn from(value: NaiveDate) -> Self {
        Self(value.format("%Y-%m-%d").to_string())
    }
}

impl Display for DayKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which readings the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DaySelection {
    /// No filter: every reading, all days.
    #[default]
    General,
    /// Only the readings whose timestamp starts with this day.
    Day(DayKey),
}

impl DaySelection {
    pub fn is_general(&self) -> bool {
        matches!(self, DaySelection::General)
    }
}

impl From<DayKey> for DaySelection {
    fn from(value: DayKey) -> Self {
        DaySelection::Day(value)
    }
}

impl From<NaiveDate> for DaySelection {
    fn from(value: NaiveDate) -> Self {
        DaySelection::Day(value.into())
    }
}

/// `"General"` maps to [`DaySelection::General`], anything else to a day key.
///
/// ```
/// use weather_dashboard::DaySelection;
///
/// assert_eq!(DaySelection::from("General"), DaySelection::General);
/// assert!(!DaySelection::from("2024-01-02").is_general());
/// ```
impl From<&str> for DaySelection {
    fn from(value: &str) -> Self {
        let value = value.trim();
        if value == GENERAL {
            DaySelection::General
        } else {
            DaySelection::Day(value.into())
        }
    }
}

impl From<String> for DaySelection {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl Display for DaySelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DaySelection::General => write!(f, "{GENERAL}"),
            DaySelection::Day(day) => write!(f, "{day}"),
        }
    }
}
