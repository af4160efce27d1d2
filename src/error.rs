use crate::config::ConfigError;
use crate::telemetry::error::FetchError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build the table frame")]
    Frame(#[from] PolarsError),
}
