//! Clients for the third-party services behind the live data source
//!
//! - Directory: country → cities listing
//! - Geocoding: city name → coordinates
//! - Forecast: coordinates → current weather and seven daily columns

use async_trait::async_trait;

use crate::Result;
use crate::models::{Coordinates, TemperatureUnit};

pub mod client;
pub mod directory;
pub mod open_meteo;
pub mod retry;

pub use client::HttpUpstream;
pub use open_meteo::ForecastResponse;

/// Everything the live data path needs from the outside world
#[async_trait]
pub trait Upstream: Send + Sync {
    /// All country names known to the directory
    async fn fetch_countries(&self) -> Result<Vec<String>>;

    /// Cities of `country` (case-insensitive match); empty when unknown
    async fn fetch_cities(&self, country: &str) -> Result<Vec<String>>;

    /// First geocoding hit for `city`, `None` when nothing matched
    async fn fetch_coordinates(&self, city: &str) -> Result<Option<Coordinates>>;

    /// Seven-day forecast with temperatures in `unit`
    async fn fetch_forecast(
        &self,
        coordinates: Coordinates,
        unit: TemperatureUnit,
    ) -> Result<ForecastResponse>;
}
