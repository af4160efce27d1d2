//! Presentation models derived from a [`crate::DashboardView`]: chart series,
//! the readings table, summary cards and the day selector. None of them mutate
//! their input.

pub mod chart;
pub mod format;
pub mod selector;
pub mod summary;
pub mod table;
pub mod text;
