mod config;
mod dashboard;
mod error;
pub mod presentation;
mod telemetry;
mod transform;
mod types;

#[cfg(test)]
mod test_support;

pub use config::{ConfigError, DashboardConfig, DISPLAY_OFFSET_VAR, ENDPOINT_VAR};
pub use dashboard::*;
pub use error::DashboardError;

pub use telemetry::error::FetchError;
pub use telemetry::fetcher::TelemetryFetcher;
pub use telemetry::payload::{flatten, parse_payload, Device, Sensor, WeatherEntry, WeatherValues};

pub use transform::{available_days, filter_by_day, sort_readings, ReadingSet, Selected};

pub use types::averages::Averages;
pub use types::day::{DayKey, DaySelection, GENERAL};
pub use types::reading::Reading;

pub use presentation::chart::{ChartSeries, LineChart, Metric};
pub use presentation::selector::{day_buttons, DayButton};
pub use presentation::summary::{summary_cards, SummaryCard};
pub use presentation::table::{DataTable, TableRow};
pub use presentation::text::render_text;
