//! HTTP implementation of [`Upstream`] with memoized lookups

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use super::Upstream;
use super::directory::DirectoryResponse;
use super::open_meteo::{self, ForecastResponse, GeocodingResponse};
use super::retry::build_client;
use crate::Result;
use crate::cache::LookupCache;
use crate::config::UpstreamConfig;
use crate::models::{Coordinates, TemperatureUnit};

/// Talks to the directory, geocoding and forecast services
pub struct HttpUpstream {
    client: ClientWithMiddleware,
    config: UpstreamConfig,
    cache: Arc<LookupCache>,
}

impl HttpUpstream {
    /// Create a client; `cache` is shared with whoever else holds it
    pub fn new(config: UpstreamConfig, cache: Arc<LookupCache>) -> Result<Self> {
        let client = build_client(&config)?;
        Ok(Self {
            client,
            config,
            cache,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("Upstream request URL: {}", url);
        let start_time = Instant::now();

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.json::<T>().await?;

        let elapsed = start_time.elapsed();
        if elapsed.as_secs() >= 5 {
            warn!("Slow upstream response detected: {:.3}s", elapsed.as_secs_f64());
        } else {
            debug!("Upstream responded in {:.3}s", elapsed.as_secs_f64());
        }
        Ok(body)
    }

    async fn fetch_directory(&self) -> Result<DirectoryResponse> {
        self.get_json(&self.config.directory_url).await
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    #[instrument(skip(self))]
    async fn fetch_countries(&self) -> Result<Vec<String>> {
        self.cache
            .countries
            .get_or_try_fetch((), || async {
                info!("Fetching country list");
                Ok(self.fetch_directory().await?.countries())
            })
            .await
    }

    #[instrument(skip(self))]
    async fn fetch_cities(&self, country: &str) -> Result<Vec<String>> {
        self.cache
            .cities
            .get_or_try_fetch(country.to_string(), || async {
                info!("Fetching cities for {}", country);
                Ok(self.fetch_directory().await?.cities_of(country))
            })
            .await
    }

    #[instrument(skip(self))]
    async fn fetch_coordinates(&self, city: &str) -> Result<Option<Coordinates>> {
        self.cache
            .coordinates
            .get_or_try_fetch(city.to_string(), || async {
                info!("Geocoding {}", city);
                let url = open_meteo::geocoding_url(&self.config.geocoding_url, city);
                let response: GeocodingResponse = self.get_json(&url).await?;
                Ok(response.first_coordinates())
            })
            .await
    }

    #[instrument(skip(self, coordinates), fields(coordinates = %coordinates.format_coordinates()))]
    async fn fetch_forecast(
        &self,
        coordinates: Coordinates,
        unit: TemperatureUnit,
    ) -> Result<ForecastResponse> {
        info!("Getting 7-day forecast in {}", unit.as_str());
        let url = open_meteo::forecast_url(&self.config.forecast_url, coordinates, unit);
        self.get_json(&url).await
    }
}
