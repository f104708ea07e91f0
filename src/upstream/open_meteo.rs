//! `OpenMeteo` geocoding and forecast response structures

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{Coordinates, DailySeries, TemperatureUnit};
use crate::{DashboardError, Result};

/// Daily variables requested from the forecast endpoint
pub const DAILY_FIELDS: [&str; 9] = [
    "weathercode",
    "temperature_2m_max",
    "temperature_2m_min",
    "precipitation_probability_mean",
    "precipitation_sum",
    "wind_speed_10m_max",
    "wind_gusts_10m_max",
    "relative_humidity_2m_mean",
    "apparent_temperature_max",
];

/// Forecast request URL for `coordinates`, temperatures in `unit`, wind in km/h
#[must_use]
pub fn forecast_url(base: &str, coordinates: Coordinates, unit: TemperatureUnit) -> String {
    format!(
        "{base}?latitude={}&longitude={}&daily={}&current_weather=true&temperature_unit={}&wind_speed_unit=kmh&timezone=auto",
        coordinates.latitude,
        coordinates.longitude,
        DAILY_FIELDS.join(","),
        unit.as_str()
    )
}

/// Geocoding request URL returning at most one match
#[must_use]
pub fn geocoding_url(base: &str, city: &str) -> String {
    format!("{base}?name={}&count=1", urlencoding::encode(city))
}

/// Geocoding response from `OpenMeteo`
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeocodingResponse {
    /// Coordinates of the best match, if any
    #[must_use]
    pub fn first_coordinates(&self) -> Option<Coordinates> {
        self.results
            .as_ref()
            .and_then(|results| results.first())
            .map(|r| Coordinates::new(r.latitude, r.longitude))
    }
}

/// Forecast response from `OpenMeteo`
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub current_weather: CurrentWeather,
    pub daily: DailyData,
}

/// `current_weather=true` block
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    /// km/h, as requested
    pub windspeed: f64,
}

/// Daily weather data from `OpenMeteo`; any entry may be null
#[derive(Debug, Clone, Deserialize)]
pub struct DailyData {
    pub time: Vec<NaiveDate>,
    #[serde(rename = "weathercode", default)]
    pub weather_code: Vec<Option<u16>>,
    #[serde(rename = "temperature_2m_max", default)]
    pub temperature_max: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_min", default)]
    pub temperature_min: Vec<Option<f64>>,
    #[serde(rename = "precipitation_probability_mean", default)]
    pub precipitation_probability: Vec<Option<f64>>,
    #[serde(rename = "precipitation_sum", default)]
    pub precipitation_sum: Vec<Option<f64>>,
    #[serde(rename = "wind_speed_10m_max", default)]
    pub wind_speed_max: Vec<Option<f64>>,
    #[serde(rename = "wind_gusts_10m_max", default)]
    pub wind_gust_max: Vec<Option<f64>>,
    #[serde(rename = "relative_humidity_2m_mean", default)]
    pub humidity_mean: Vec<Option<f64>>,
    #[serde(rename = "apparent_temperature_max", default)]
    pub apparent_temperature_max: Vec<Option<f64>>,
}

fn required(values: Vec<Option<f64>>, field: &str) -> Result<Vec<f64>> {
    values
        .into_iter()
        .enumerate()
        .map(|(day, value)| {
            value.ok_or_else(|| {
                DashboardError::unexpected(format!("forecast is missing {field} for day {day}"))
            })
        })
        .collect()
}

fn or_zero(values: Vec<Option<f64>>) -> Vec<f64> {
    values.into_iter().map(|v| v.unwrap_or(0.0)).collect()
}

impl DailyData {
    /// Convert into the shared column layout.
    ///
    /// Temperatures must be present; other nulls read as 0 and a missing
    /// weather code falls through to the default condition.
    pub fn into_series(self) -> Result<DailySeries> {
        Ok(DailySeries {
            time: self.time,
            temperature_max: required(self.temperature_max, "temperature_2m_max")?,
            temperature_min: required(self.temperature_min, "temperature_2m_min")?,
            wind_speed_max: or_zero(self.wind_speed_max),
            wind_gust_max: or_zero(self.wind_gust_max),
            humidity_mean: or_zero(self.humidity_mean),
            apparent_temperature_max: or_zero(self.apparent_temperature_max),
            precipitation_probability: or_zero(self.precipitation_probability),
            precipitation_sum: or_zero(self.precipitation_sum),
            weather_code: self
                .weather_code
                .into_iter()
                .map(|code| code.unwrap_or(u16::MAX))
                .collect(),
        })
    }
}
