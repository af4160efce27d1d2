//! Spanish (`es_ES`) date and time labels.

use crate::types::day::DayKey;
use chrono::{DateTime, FixedOffset, Locale, TimeZone, Utc};

pub const LOCALE: Locale = Locale::es_ES;

/// 24-hour `HH:MM`, used for chart x-axis ticks.
pub fn hour_minute(instant: &DateTime<Utc>, offset: &FixedOffset) -> String {
    instant
        .with_timezone(offset)
        .format_localized("%H:%M", LOCALE)
        .to_string()
}

/// Long date for the day selector, e.g. `1 de enero de 2024`.
///
/// The key is a calendar date already, so no offset applies. A key that is not a
/// valid date is shown as-is.
pub fn day_label(day: &DayKey) -> String {
    match day.date().and_then(|date| date.and_hms_opt(0, 0, 0)) {
        Some(midnight) => Utc
            .from_utc_datetime(&midnight)
            .format_localized("%-d de %B de %Y", LOCALE)
            .to_string(),
        None => day.to_string(),
    }
}

/// Date and time for the table, e.g. `1/1/2024, 8:00:00`.
pub fn table_timestamp(instant: &DateTime<Utc>, offset: &FixedOffset) -> String {
    instant
        .with_timezone(offset)
        .format_localized("%-d/%-m/%Y, %-H:%M:%S", LOCALE)
        .to_string()
}
