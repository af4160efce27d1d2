//! Line-chart data: x labels plus one y series per metric.
//!
//! Rendering is left to a charting crate; these types only carry what it needs.

use crate::presentation::format::hour_minute;
use crate::types::reading::Reading;
use chrono::FixedOffset;
use polars::df;
use polars::prelude::{Column, DataFrame, PolarsResult};
use std::fmt;
use std::fmt::{Display, Formatter};

/// One of the three plotted quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    Humidity,
    Pressure,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Temperature, Metric::Humidity, Metric::Pressure];

    /// Legend name of the series.
    pub fn series_name(&self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature (°C)",
            Metric::Humidity => "Humidity (%)",
            Metric::Pressure => "Pressure (hPa)",
        }
    }

    /// Heading of the single-metric chart and of the table column.
    pub fn title(&self) -> &'static str {
        match self {
            Metric::Temperature => "Temperatura (°C)",
            Metric::Humidity => "Humedad (%)",
            Metric::Pressure => "Presión (hPa)",
        }
    }

    /// Line colour as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Metric::Temperature => "#8884d8",
            Metric::Humidity => "#82ca9d",
            Metric::Pressure => "#ffc658",
        }
    }

    /// Line colour as RGB components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Metric::Temperature => (0x88, 0x84, 0xd8),
            Metric::Humidity => (0x82, 0xca, 0x9d),
            Metric::Pressure => (0xff, 0xc6, 0x58),
        }
    }

    pub fn value(&self, reading: &Reading) -> f64 {
        match self {
            Metric::Temperature => reading.temperature,
            Metric::Humidity => reading.humidity,
            Metric::Pressure => reading.pressure,
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.series_name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub metric: Metric,
    pub values: Vec<f64>,
}

/// A line chart over the filtered readings.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    /// `None` for the combined chart, which carries a legend instead.
    pub title: Option<&'static str>,
    /// One `HH:MM` label per reading.
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl LineChart {
    /// A chart plotting `metrics` over `readings`.
    pub fn new(
        title: Option<&'static str>,
        readings: &[Reading],
        metrics: &[Metric],
        offset: &FixedOffset,
    ) -> Self {
        let labels = readings
            .iter()
            .map(|reading| hour_minute(&reading.instant(), offset))
            .collect();
        let series = metrics
            .iter()
            .map(|&metric| ChartSeries {
                metric,
                values: readings.iter().map(|r| metric.value(r)).collect(),
            })
            .collect();
        Self {
            title,
            labels,
            series,
        }
    }

    /// All three metrics on one chart.
    pub fn combined(readings: &[Reading], offset: &FixedOffset) -> Self {
        Self::new(None, readings, &Metric::ALL, offset)
    }

    /// One chart per metric, titled in Spanish.
    pub fn per_metric(readings: &[Reading], offset: &FixedOffset) -> [Self; 3] {
        Metric::ALL.map(|metric| Self::new(Some(metric.title()), readings, &[metric], offset))
    }

    /// Series bounds, for axis ranges. `None` when there is nothing to plot.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Frame column for `metric`: the legend name on the combined chart, the
    /// Spanish title on a per-metric one.
    pub fn column_name(&self, metric: Metric) -> &'static str {
        match self.title {
            None => metric.series_name(),
            Some(_) => metric.title(),
        }
    }

    /// A frame with an `Hora` column and one column per series, named by
    /// [`LineChart::column_name`].
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let mut frame = df!("Hora" => self.labels.clone())?;
        for series in &self.series {
            frame.with_column(Column::new(
                self.column_name(series.metric).into(),
                series.values.clone(),
            ))?;
        }
        Ok(frame)
    }
}
