//! Runtime configuration: where to fetch telemetry from and which UTC offset to
//! display times in.

use bon::bon;
use chrono::{FixedOffset, Local};
use log::debug;
use reqwest::Url;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the devices endpoint URL.
pub const ENDPOINT_VAR: &str = "WEATHER_API_URL";
/// Optional environment variable with the display offset from UTC, in minutes.
pub const DISPLAY_OFFSET_VAR: &str = "WEATHER_DISPLAY_UTC_OFFSET_MINUTES";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    MissingEndpoint(&'static str),

    #[error("Endpoint '{0}' is not a valid URL")]
    InvalidEndpoint(String, #[source] url::ParseError),

    #[error("Endpoint '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("Display offset '{0}' is not a whole number of minutes between -1439 and 1439")]
    InvalidOffset(String),

    #[error("Failed to read environment file '{0}'")]
    EnvFile(PathBuf, #[source] dotenv::Error),
}

/// Settings for the fetcher and the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// The devices endpoint answering the telemetry GET.
    pub endpoint: Url,
    /// Offset used when formatting times for display.
    pub display_offset: FixedOffset,
}

#[bon]
impl DashboardConfig {
    /// Builds a configuration from explicit values.
    ///
    /// `display_offset` defaults to the machine's current local offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_dashboard::DashboardConfig;
    /// use chrono::FixedOffset;
    ///
    /// let config = DashboardConfig::builder()
    ///     .endpoint("http://localhost:3000/api/v1/devices")
    ///     .display_offset(FixedOffset::east_opt(3600).unwrap())
    ///     .build()?;
    /// assert_eq!(config.endpoint.path(), "/api/v1/devices");
    /// # Ok::<(), weather_dashboard::ConfigError>(())
    /// ```
    #[builder]
    pub fn new(endpoint: &str, display_offset: Option<FixedOffset>) -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: parse_endpoint(endpoint)?,
            display_offset: display_offset.unwrap_or_else(|| *Local::now().offset()),
        })
    }

    /// Reads the configuration from the process environment, after loading a
    /// `.env` file from the working directory (or a parent) if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration from an env file without touching the process
    /// environment. Keys missing from the file fall back to the environment.
    // dotenv 0.15 deprecates `from_path_iter`, but it is the only entry point
    // that reads a file without writing into the process environment.
    #[allow(deprecated)]
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        let iter =
            dotenv::from_path_iter(path).map_err(|e| ConfigError::EnvFile(path.to_path_buf(), e))?;
        let mut values = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| ConfigError::EnvFile(path.to_path_buf(), e))?;
            values.insert(key, value);
        }
        Self::from_lookup(|key| values.get(key).cloned().or_else(|| env::var(key).ok()))
    }

    /// Resolves both settings through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint = lookup(ENDPOINT_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingEndpoint(ENDPOINT_VAR))?;
        let display_offset = lookup(DISPLAY_OFFSET_VAR)
            .map(|raw| parse_offset(&raw))
            .transpose()?;
        Self::builder()
            .endpoint(&endpoint)
            .maybe_display_offset(display_offset)
            .build()
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let raw = raw.trim();
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidEndpoint(raw.to_string(), e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme(raw.to_string())),
    }
}

fn parse_offset(raw: &str) -> Result<FixedOffset, ConfigError> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .and_then(|minutes| minutes.checked_mul(60))
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| ConfigError::InvalidOffset(raw.to_string()))
}
