//! Defines [`Reading`], one timestamped temperature/humidity/pressure measurement,
//! and the timestamp parsing used to order readings in time.

use crate::types::day::DayKey;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

/// A single weather measurement reported by a station sensor.
///
/// The `timestamp` string is kept as reported, minus surrounding whitespace:
/// day bucketing works on its `YYYY-MM-DD` prefix, while ordering uses the
/// parsed instant. Readings are immutable once parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Atmospheric pressure in hPa.
    pub pressure: f64,
    /// The ISO-8601 timestamp as reported by the endpoint, trimmed.
    pub timestamp: String,
    #[serde(skip)]
    instant: DateTime<Utc>,
}

impl Reading {
    /// Creates a reading, parsing `timestamp` into an instant.
    ///
    /// Returns `None` when the timestamp is not an ISO-8601 date or datetime,
    /// or when it does not start with a `YYYY-MM-DD` date followed by `T` or
    /// nothing at all, since such a reading can be neither ordered nor bucketed
    /// by day.
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_dashboard::Reading;
    ///
    /// let reading = Reading::new(21.5, 40.0, 1013.2, "2024-01-01T08:00:00Z").unwrap();
    /// assert_eq!(reading.day_key().as_str(), "2024-01-01");
    /// assert!(Reading::new(21.5, 40.0, 1013.2, "yesterday").is_none());
    /// ```
    pub fn new(
        temperature: f64,
        humidity: f64,
        pressure: f64,
        timestamp: impl Into<String>,
    ) -> Option<Self> {
        let timestamp: String = timestamp.into();
        let timestamp = timestamp.trim().to_string();
        if !has_day_prefix(&timestamp) {
            return None;
        }
        let instant = parse_instant(&timestamp)?;
        Some(Self {
            temperature,
            humidity,
            pressure,
            timestamp,
            instant,
        })
    }

    /// The point in time this reading was taken.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// The calendar day this reading is bucketed under.
    pub fn day_key(&self) -> DayKey {
        DayKey::from_timestamp(&self.timestamp)
    }

    /// Whether this reading's timestamp starts with the given day's prefix.
    pub fn belongs_to(&self, day: &DayKey) -> bool {
        self.timestamp.starts_with(day.as_str())
    }
}

/// Whether `timestamp` opens with a valid `YYYY-MM-DD` date that is either the
/// whole string or followed by a `T`.
fn has_day_prefix(timestamp: &str) -> bool {
    let Some(date) = timestamp.get(..10) else {
        return false;
    };
    let rest = &timestamp[10..];
    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
        && (rest.is_empty() || rest.starts_with('T'))
}

/// Parses an ISO-8601 timestamp into a UTC instant.
///
/// Accepts RFC 3339 (with `Z` or an explicit offset), a datetime without an offset
/// (taken as UTC), and a bare `YYYY-MM-DD` date (midnight UTC).
pub(crate) fn parse_instant(timestamp: &str) -> Option<DateTime<Utc>> {
    let timestamp = timestamp.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(with_offset.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_offsets_into_utc() {
        let reading = Reading::new(1.0, 2.0, 3.0, "2024-01-01T08:00:00+02:00").unwrap();
        assert_eq!(
            reading.instant(),
            Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap()
        );
        // The day key follows the reported string, not the UTC instant
        assert_eq!(reading.day_key().as_str(), "2024-01-01");
    }

    #[test]
    fn accepts_fractional_seconds_and_missing_offset() {
        let zulu = Reading::new(1.0, 2.0, 3.0, "2024-03-05T10:15:30.250Z").unwrap();
        let naive = Reading::new(1.0, 2.0, 3.0, "2024-03-05T10:15:30.250").unwrap();
        assert_eq!(zulu.instant(), naive.instant());
    }

    #[test]
    fn bare_date_is_midnight_utc() {
        let reading = Reading::new(1.0, 2.0, 3.0, "2024-03-05").unwrap();
        assert_eq!(
            reading.instant(),
            Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_instant("").is_none());
        assert!(parse_instant("2024-13-40T99:00:00Z").is_none());
        assert!(parse_instant("not a date").is_none());
    }

    #[test]
    fn belongs_to_uses_string_prefix() {
        let reading = Reading::new(1.0, 2.0, 3.0, "2024-01-02T23:59:59Z").unwrap();
        assert!(reading.belongs_to(&DayKey::from("2024-01-02")));
        assert!(!reading.belongs_to(&DayKey::from("2024-01-01")));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let reading = Reading::new(1.0, 2.0, 3.0, " 2024-01-01T08:00:00Z\n").unwrap();
        assert_eq!(reading.timestamp, "2024-01-01T08:00:00Z");
        assert_eq!(reading.day_key().as_str(), "2024-01-01");
        assert!(reading.belongs_to(&DayKey::from("2024-01-01")));
    }

    #[test]
    fn rejects_timestamps_without_a_t_separated_date() {
        // chrono's RFC 3339 parser takes these, but they carry no bucketable day
        assert!(parse_instant("2024-01-01 08:00:00Z").is_some());
        assert!(Reading::new(1.0, 2.0, 3.0, "2024-01-01 08:00:00Z").is_none());
        assert!(Reading::new(1.0, 2.0, 3.0, "2024-01-01t08:00:00z").is_none());
        assert!(Reading::new(1.0, 2.0, 3.0, "20240101T080000Z").is_none());
        assert!(Reading::new(1.0, 2.0, 3.0, "2024-1-1T08:00:00Z").is_none());
    }
}
