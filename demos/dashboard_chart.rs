//! demos/dashboard_chart.rs
//!
//! Fetches telemetry, optionally filters to one day, and plots the combined chart
//! plus one chart per metric using `plotlars`.
//!
//! To run this example:
//! WEATHER_API_URL=... cargo run --example dashboard_chart --features charts -- 2024-01-02

use plotlars::{Legend, Line, Plot, Rgb, Text, TimeSeriesPlot};
use polars::prelude::*;
use weather_dashboard::{
    Dashboard, DashboardConfig, DashboardError, DaySelection, LineChart, Metric, TelemetryFetcher,
};

#[tokio::main]
async fn main() -> Result<(), DashboardError> {
    env_logger::init();

    let config = DashboardConfig::from_env()?;
    let selection = std::env::args()
        .nth(1)
        .map(DaySelection::from)
        .unwrap_or_default();

    let mut dashboard = Dashboard::mount()
        .fetcher(TelemetryFetcher::from_config(&config))
        .selection(selection)
        .call();
    dashboard.wait_until_loaded().await;

    let view = dashboard.view();
    if let Some(message) = view.load_error() {
        eprintln!("Error: {}", message);
    }

    let combined = LineChart::combined(&view.readings, &config.display_offset);
    plot_chart(&combined, &combined.to_frame()?, "Weather Station Dashboard");

    for chart in LineChart::per_metric(&view.readings, &config.display_offset) {
        let title = chart.title.unwrap_or_default();
        plot_chart(&chart, &chart.to_frame()?, title);
    }

    Ok(())
}

// --- Plotting Helper Function ---

/// Plots every series of `chart` against its `Hora` column.
fn plot_chart(chart: &LineChart, data: &DataFrame, title: &str) {
    let metrics: Vec<Metric> = chart.series.iter().map(|s| s.metric).collect();
    let Some((first, rest)) = metrics.split_first() else {
        return;
    };

    TimeSeriesPlot::builder()
        .data(data)
        .x("Hora")
        .y(chart.column_name(*first))
        .additional_series(rest.iter().map(|&m| chart.column_name(m)).collect())
        .size(8)
        .colors(
            metrics
                .iter()
                .map(|m| {
                    let (r, g, b) = m.rgb();
                    Rgb(r, g, b)
                })
                .collect(),
        )
        .lines(metrics.iter().map(|_| Line::Solid).collect())
        .plot_title(Text::from(title).font("Arial").size(18))
        .legend(&Legend::new().x(0.05).y(0.9))
        .x_title("Hora")
        .build()
        .plot();
}
