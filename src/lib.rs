//! `ForecastDash` - weather dashboard backend
//!
//! Serves country, city and weather data to the dashboard's browser client,
//! either from a built-in demo dataset or from the country directory and
//! `OpenMeteo` services.

pub mod api;
pub mod cache;
pub mod config;
pub mod conversions;
pub mod error;
pub mod mock;
pub mod models;
pub mod service;
pub mod telemetry;
pub mod upstream;
pub mod weather_codes;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use cache::LookupCache;
pub use config::DashboardConfig;
pub use error::DashboardError;
pub use models::{DataSource, TemperatureUnit, WeatherReport};
pub use service::WeatherService;
pub use upstream::{HttpUpstream, Upstream};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, DashboardError>;
