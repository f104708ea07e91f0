//! Column-oriented daily forecast series

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{DashboardError, Result};

/// Number of forecast days every `/weather` response carries
pub const FORECAST_DAYS: usize = 7;

/// Daily values in Open-Meteo's column layout, one entry per day.
///
/// Temperatures are in whatever unit the producer used; the mock generator
/// and the live path both produce Celsius.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct DailySeries {
    pub time: Vec<NaiveDate>,
    pub temperature_max: Vec<f64>,
    pub temperature_min: Vec<f64>,
    /// km/h
    pub wind_speed_max: Vec<f64>,
    /// km/h
    pub wind_gust_max: Vec<f64>,
    pub humidity_mean: Vec<f64>,
    pub apparent_temperature_max: Vec<f64>,
    pub precipitation_probability: Vec<f64>,
    /// mm
    pub precipitation_sum: Vec<f64>,
    pub weather_code: Vec<u16>,
}

impl DailySeries {
    /// Length of the shortest column
    #[must_use]
    pub fn len(&self) -> usize {
        [
            self.time.len(),
            self.temperature_max.len(),
            self.temperature_min.len(),
            self.wind_speed_max.len(),
            self.wind_gust_max.len(),
            self.humidity_mean.len(),
            self.apparent_temperature_max.len(),
            self.precipitation_probability.len(),
            self.precipitation_sum.len(),
            self.weather_code.len(),
        ]
        .into_iter()
        .min()
        .unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fails unless every column holds at least `days` entries
    pub fn ensure_days(&self, days: usize) -> Result<()> {
        let available = self.len();
        if available < days {
            return Err(DashboardError::unexpected(format!(
                "daily forecast holds {available} days, expected {days}"
            )));
        }
        Ok(())
    }
}
