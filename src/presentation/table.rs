use crate::presentation::chart::Metric;
use crate::presentation::format::table_timestamp;
use crate::types::reading::Reading;
use chrono::FixedOffset;
use polars::df;
use polars::prelude::{DataFrame, PolarsResult};

pub const DATE_HEADER: &str = "Fecha";

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub date: String,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

/// The tabular view of the filtered readings.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    pub rows: Vec<TableRow>,
}

impl DataTable {
    pub fn from_readings(readings: &[Reading], offset: &FixedOffset) -> Self {
        let rows = readings
            .iter()
            .map(|reading| TableRow {
                date: table_timestamp(&reading.instant(), offset),
                temperature: reading.temperature,
                humidity: reading.humidity,
                pressure: reading.pressure,
            })
            .collect();
        Self { rows }
    }

    pub fn headers() -> [&'static str; 4] {
        [
            DATE_HEADER,
            Metric::Temperature.title(),
            Metric::Humidity.title(),
            Metric::Pressure.title(),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The table as a polars frame, columns named by [`DataTable::headers`].
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let [date, temperature, humidity, pressure] = Self::headers();
        df!(
            date => self.rows.iter().map(|r| r.date.clone()).collect::<Vec<_>>(),
            temperature => self.rows.iter().map(|r| r.temperature).collect::<Vec<_>>(),
            humidity => self.rows.iter().map(|r| r.humidity).collect::<Vec<_>>(),
            pressure => self.rows.iter().map(|r| r.pressure).collect::<Vec<_>>()
        )
    }
}
