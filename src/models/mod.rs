//! Data models for the `ForecastDash` backend
//!
//! This module contains the core domain models organized by concern:
//! - Location: coordinates and the country/city directory entries
//! - Weather: request selectors and the response shapes sent to the client
//! - Forecast: column-oriented daily series shared by mock and live sources

pub mod forecast;
pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::DailySeries;
pub use location::{Coordinates, CountryCities};
pub use weather::{CurrentConditions, DataSource, ForecastDay, TemperatureUnit, WeatherReport};
