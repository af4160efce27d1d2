//! The data-shaping pipeline: sort → derive days → filter by day → aggregate.
//!
//! Every function here is pure. [`ReadingSet`] bundles the once-per-load part
//! (sorting and day derivation) so that a selection change only re-runs the
//! filter and the averages.

use crate::types::averages::Averages;
use crate::types::day::{DayKey, DaySelection};
use crate::types::reading::Reading;
use std::collections::HashSet;

/// Sorts readings by instant, oldest first.
///
/// The sort is stable: readings with identical timestamps keep their input order.
pub fn sort_readings(mut readings: Vec<Reading>) -> Vec<Reading> {
    readings.sort_by_key(Reading::instant);
    readings
}

/// Distinct day keys in order of first appearance.
pub fn available_days<'a>(readings: impl IntoIterator<Item = &'a Reading>) -> Vec<DayKey> {
    let mut seen = HashSet::new();
    readings
        .into_iter()
        .map(Reading::day_key)
        .filter(|day| seen.insert(day.clone()))
        .collect()
}

/// The readings shown for `selection`.
///
/// [`DaySelection::General`] keeps everything; a specific day keeps exactly the
/// readings whose timestamp string starts with that day.
pub fn filter_by_day<'a>(readings: &'a [Reading], selection: &DaySelection) -> Vec<&'a Reading> {
    match selection {
        DaySelection::General => readings.iter().collect(),
        DaySelection::Day(day) => readings.iter().filter(|r| r.belongs_to(day)).collect(),
    }
}

/// A loaded batch of readings, sorted, with its day keys derived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingSet {
    readings: Vec<Reading>,
    days: Vec<DayKey>,
}

impl ReadingSet {
    /// Sorts `raw` and derives its days.
    pub fn from_raw(raw: Vec<Reading>) -> Self {
        let readings = sort_readings(raw);
        let days = available_days(&readings);
        Self { readings, days }
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn days(&self) -> &[DayKey] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Filters to `selection` and averages the result.
    pub fn select(&self, selection: &DaySelection) -> Selected {
        let readings: Vec<Reading> = filter_by_day(&self.readings, selection)
            .into_iter()
            .cloned()
            .collect();
        let averages = Averages::of(&readings);
        Selected {
            selection: selection.clone(),
            readings,
            averages,
        }
    }
}

/// The filtered readings for one selection together with their averages.
#[derive(Debug, Clone, PartialEq)]
pub struct Selected {
    pub selection: DaySelection,
    pub readings: Vec<Reading>,
    pub averages: Averages,
}
