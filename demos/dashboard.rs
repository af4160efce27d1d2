//! demos/dashboard.rs
//!
//! Mounts a dashboard against the endpoint in `WEATHER_API_URL` (or `.env`),
//! prints it, then reads day selections from stdin: a `YYYY-MM-DD` day,
//! `General`, or `q` to quit.
//!
//! To run this example:
//! WEATHER_API_URL=http://localhost:3000/api/v1/devices RUST_LOG=info cargo run --example dashboard

use std::env;
use std::error::Error;

use tokio::io::{AsyncBufReadExt, BufReader};
use weather_dashboard::{render_text, Dashboard, DashboardConfig, TelemetryFetcher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    configure_polars_display();

    let config = DashboardConfig::from_env()?;
    let offset = config.display_offset;

    let mut dashboard = Dashboard::mount()
        .fetcher(TelemetryFetcher::from_config(&config))
        .call();

    // Renders straight away with an empty data set
    println!("{}", render_text(dashboard.view(), &offset));

    dashboard.wait_until_loaded().await;
    print_view(&mut dashboard, &offset)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input {
            "" => continue,
            "q" | "quit" => break,
            day => dashboard.select_day(day),
        }
        print_view(&mut dashboard, &offset)?;
    }

    Ok(())
}

fn print_view(
    dashboard: &mut Dashboard,
    offset: &chrono::FixedOffset,
) -> Result<(), Box<dyn Error>> {
    let view = dashboard.view();
    println!("{}", render_text(view, offset));
    println!("{}", view.to_frame(offset)?);
    println!("Día (YYYY-MM-DD), General o q:");
    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show 50 rows
    env::set_var("POLARS_FMT_MAX_ROWS", "50");
}
