//! Configuration management for the `ForecastDash` backend
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::DashboardError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration file read when no path is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Root configuration structure for the dashboard backend
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Third-party service configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the browser client's assets
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Country directory, geocoding and forecast service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Country/city directory endpoint
    #[serde(default = "default_directory_url")]
    pub directory_url: String,
    /// Geocoding search endpoint
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,
    /// Forecast endpoint
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of retries for transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// First retry delay; doubles on every further attempt
    #[serde(default = "default_initial_backoff")]
    pub initial_backoff_ms: u64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_directory_url() -> String {
    "https://countriesnow.space/api/v0.1/countries".to_string()
}

fn default_geocoding_url() -> String {
    "https://geocoding-api.open-meteo.com/v1/search".to_string()
}

fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_timeout() -> u32 {
    5
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_backoff() -> u64 {
    1000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            directory_url: default_directory_url(),
            geocoding_url: default_geocoding_url(),
            forecast_url: default_forecast_url(),
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
            initial_backoff_ms: default_initial_backoff(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl UpstreamConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.into())
    }

    #[must_use]
    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }

    /// Upper bound for the exponential backoff: initial * 2^(retries - 1)
    #[must_use]
    pub fn max_backoff(&self) -> Duration {
        let factor = 2u32.saturating_pow(self.max_retries.saturating_sub(1));
        self.initial_backoff().saturating_mul(factor)
    }
}

impl DashboardConfig {
    /// Load configuration from `config_path`, or `config/default.toml` when
    /// none is given, then apply `FORECASTDASH__*` environment overrides
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // FORECASTDASH__UPSTREAM__TIMEOUT_SECONDS=10 style overrides
        builder = builder.add_source(
            Environment::with_prefix("FORECASTDASH")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: DashboardConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.server.static_dir.is_empty() {
            self.server.static_dir = default_static_dir();
        }
        if self.upstream.directory_url.is_empty() {
            self.upstream.directory_url = default_directory_url();
        }
        if self.upstream.geocoding_url.is_empty() {
            self.upstream.geocoding_url = default_geocoding_url();
        }
        if self.upstream.forecast_url.is_empty() {
            self.upstream.forecast_url = default_forecast_url();
        }
        if self.upstream.timeout_seconds == 0 {
            self.upstream.timeout_seconds = default_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(DashboardError::config("Server port cannot be 0").into());
        }

        if self.upstream.timeout_seconds > 300 {
            return Err(
                DashboardError::config("Upstream timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.upstream.max_retries > 10 {
            return Err(DashboardError::config("Upstream max retries cannot exceed 10").into());
        }

        if self.upstream.initial_backoff_ms > 60_000 {
            return Err(
                DashboardError::config("Initial backoff cannot exceed 60000 ms").into(),
            );
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(DashboardError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(DashboardError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("directory", &self.upstream.directory_url),
            ("geocoding", &self.upstream.geocoding_url),
            ("forecast", &self.upstream.forecast_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(DashboardError::config(format!(
                    "Upstream {name} URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.upstream.timeout_seconds, 5);
        assert_eq!(config.upstream.max_retries, 3);
        assert_eq!(config.logging.level, "info");
        assert!(config.upstream.forecast_url.starts_with("https://api.open-meteo.com"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_backoff_bounds() {
        let config = UpstreamConfig::default();
        assert_eq!(config.initial_backoff(), Duration::from_secs(1));
        assert_eq!(config.max_backoff(), Duration::from_secs(4));
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = DashboardConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = DashboardConfig::default();
        config.upstream.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_config_validation_rejects_non_http_url() {
        let mut config = DashboardConfig::default();
        config.upstream.geocoding_url = "ftp://example.com".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("geocoding"));
    }

    #[test]
    fn test_apply_defaults_fills_empty_fields() {
        let mut config = DashboardConfig::default();
        config.upstream.forecast_url.clear();
        config.logging.format.clear();
        config.apply_defaults();
        assert_eq!(config.upstream.forecast_url, default_forecast_url());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_bundled_default_file_loads() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_PATH);
        let config = DashboardConfig::load_from_path(Some(path)).unwrap();
        let defaults = DashboardConfig::default();
        assert_eq!(config.server.port, defaults.server.port);
        assert_eq!(config.upstream.max_retries, defaults.upstream.max_retries);
        assert_eq!(config.upstream.forecast_url, defaults.upstream.forecast_url);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config =
            DashboardConfig::load_from_path(Some(PathBuf::from("does-not-exist.toml"))).unwrap();
        assert_eq!(config.server.static_dir, "static");
    }
}
