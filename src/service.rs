//! Dashboard orchestration: picks mock or live data and shapes the responses
//!
//! Both data paths produce Celsius readings plus a [`DailySeries`]; the report
//! builder is the single place where display units are applied.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, info, instrument};

use crate::conversions::{apparent_temperature, convert_temperature, round1};
use crate::mock::MockDataset;
use crate::models::forecast::FORECAST_DAYS;
use crate::models::{
    CurrentConditions, DailySeries, DataSource, ForecastDay, TemperatureUnit, WeatherReport,
};
use crate::upstream::Upstream;
use crate::weather_codes::resolve_weather_code;
use crate::{DashboardError, Result};

/// Current readings before any unit conversion
#[derive(Debug, Clone)]
struct Observation {
    temperature_c: f64,
    /// km/h
    windspeed: f64,
    humidity: f64,
    daily: DailySeries,
}

/// Request-independent service behind the three endpoints
pub struct WeatherService {
    upstream: Arc<dyn Upstream>,
    mock: MockDataset,
}

impl WeatherService {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self::with_mock(upstream, MockDataset::default())
    }

    pub fn with_mock(upstream: Arc<dyn Upstream>, mock: MockDataset) -> Self {
        Self { upstream, mock }
    }

    /// Countries for the country dropdown
    #[instrument(skip(self))]
    pub async fn locations(&self, source: DataSource) -> Result<Vec<String>> {
        match source {
            DataSource::Mock => Ok(vec![self.mock.country().to_string()]),
            DataSource::Live => self.upstream.fetch_countries().await,
        }
    }

    /// Cities of `country`. Countries outside the mock set are looked up in
    /// the live directory even when mock data was requested.
    #[instrument(skip(self))]
    pub async fn cities(&self, source: DataSource, country: &str) -> Result<Vec<String>> {
        let country = country.trim();
        if source == DataSource::Mock && country == self.mock.country() {
            return Ok(self.mock.city_names());
        }
        self.upstream.fetch_cities(country).await
    }

    /// Current conditions and the 7-day forecast for `city`
    #[instrument(skip(self))]
    pub async fn weather(
        &self,
        source: DataSource,
        city: &str,
        unit: TemperatureUnit,
    ) -> Result<WeatherReport> {
        let city = city.trim();
        if city.is_empty() {
            return Err(DashboardError::validation("City parameter is required"));
        }

        let observation = match source {
            DataSource::Mock => self.mock_observation(city, Local::now().date_naive())?,
            DataSource::Live => self.live_observation(city).await?,
        };

        let report = build_report(observation, unit)?;
        info!(
            temperature = report.current.temperature,
            condition = %report.current.weather_text,
            "Weather report ready"
        );
        Ok(report)
    }

    fn mock_observation(&self, city: &str, today: NaiveDate) -> Result<Observation> {
        let mock_city = self
            .mock
            .city(city)
            .ok_or_else(|| DashboardError::not_found(format!("City '{city}' not in mock data")))?;

        let mut rng = rand::rng();
        let humidity = self.mock.current_humidity(&mut rng);
        let daily = self.mock.generate_daily(mock_city, today, &mut rng);
        debug!("Generated mock series for {}", city);

        Ok(Observation {
            temperature_c: mock_city.temperature,
            windspeed: mock_city.windspeed,
            humidity,
            daily,
        })
    }

    async fn live_observation(&self, city: &str) -> Result<Observation> {
        let coordinates = self.upstream.fetch_coordinates(city).await?.ok_or_else(|| {
            DashboardError::not_found(format!("City '{city}' not found in geocoding API"))
        })?;

        // Celsius upstream keeps the feels-like input and the local conversion consistent
        let forecast = self
            .upstream
            .fetch_forecast(coordinates, TemperatureUnit::Celsius)
            .await?;

        let daily = forecast.daily.into_series()?;
        daily.ensure_days(FORECAST_DAYS)?;

        Ok(Observation {
            temperature_c: forecast.current_weather.temperature,
            windspeed: forecast.current_weather.windspeed,
            humidity: daily.humidity_mean[0],
            daily,
        })
    }
}

fn build_report(observation: Observation, unit: TemperatureUnit) -> Result<WeatherReport> {
    let Observation {
        temperature_c,
        windspeed,
        humidity,
        daily,
    } = observation;
    daily.ensure_days(FORECAST_DAYS)?;

    let day_zero = resolve_weather_code(daily.weather_code[0]);
    let feels_like_c = apparent_temperature(temperature_c, windspeed, humidity);

    let current = CurrentConditions {
        temperature: convert_temperature(temperature_c, unit),
        windspeed: round1(windspeed),
        humidity,
        weather_text: day_zero.text.to_string(),
        weather_icon: day_zero.icon.to_string(),
        feels_like: convert_temperature(feels_like_c, unit),
        date: daily.time[0],
    };

    let forecast = (0..FORECAST_DAYS)
        .map(|day| {
            let condition = resolve_weather_code(daily.weather_code[day]);
            ForecastDay {
                date: daily.time[day],
                max: convert_temperature(daily.temperature_max[day], unit),
                min: convert_temperature(daily.temperature_min[day], unit),
                wind_speed: daily.wind_speed_max[day],
                wind_gust: daily.wind_gust_max[day],
                humidity: daily.humidity_mean[day],
                precipitation_probability: daily.precipitation_probability[day],
                rain_sum: daily.precipitation_sum[day],
                weather_text: condition.text.to_string(),
                weather_icon: condition.icon.to_string(),
            }
        })
        .collect();

    Ok(WeatherReport { current, forecast })
}
