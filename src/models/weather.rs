//! Request selectors and the weather response shapes sent to the client

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where `/locations`, `/cities` and `/weather` take their data from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    #[default]
    Mock,
    Live,
}

impl DataSource {
    /// Only the exact value `mock` selects mock data; anything else goes live.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            None | Some("mock") => DataSource::Mock,
            Some(_) => DataSource::Live,
        }
    }
}

/// Display unit for temperatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Case-insensitive; every value other than `celsius` means Fahrenheit.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            None => TemperatureUnit::Celsius,
            Some(v) if v.eq_ignore_ascii_case("celsius") => TemperatureUnit::Celsius,
            Some(_) => TemperatureUnit::Fahrenheit,
        }
    }

    /// Whether the raw query value names one of the two units
    #[must_use]
    pub fn is_recognized(value: &str) -> bool {
        value.eq_ignore_ascii_case("celsius") || value.eq_ignore_ascii_case("fahrenheit")
    }

    /// Value expected by the forecast service's `temperature_unit` parameter
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }
}

/// Current weather card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentConditions {
    /// Temperature in the requested unit
    pub temperature: f64,
    /// Wind speed in km/h
    pub windspeed: f64,
    /// Relative humidity in percent (0-100)
    pub humidity: f64,
    pub weather_text: String,
    /// Icon markup rendered verbatim by the client
    pub weather_icon: String,
    /// Apparent temperature in the requested unit
    pub feels_like: f64,
    pub date: NaiveDate,
}

/// One forecast card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub max: f64,
    pub min: f64,
    /// km/h
    pub wind_speed: f64,
    /// km/h
    pub wind_gust: f64,
    pub humidity: f64,
    /// Precipitation probability in percent
    #[serde(rename = "precipitation")]
    pub precipitation_probability: f64,
    /// Precipitation sum in mm
    #[serde(rename = "rain")]
    pub rain_sum: f64,
    pub weather_text: String,
    pub weather_icon: String,
}

/// Body of a successful `/weather` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, DataSource::Mock)]
    #[case(Some("mock"), DataSource::Mock)]
    #[case(Some("live"), DataSource::Live)]
    #[case(Some("Mock"), DataSource::Live)]
    fn test_data_source_from_query(#[case] raw: Option<&str>, #[case] expected: DataSource) {
        assert_eq!(DataSource::from_query(raw), expected);
    }

    #[rstest]
    #[case(None, TemperatureUnit::Celsius)]
    #[case(Some("celsius"), TemperatureUnit::Celsius)]
    #[case(Some("CELSIUS"), TemperatureUnit::Celsius)]
    #[case(Some("fahrenheit"), TemperatureUnit::Fahrenheit)]
    #[case(Some("kelvin"), TemperatureUnit::Fahrenheit)]
    fn test_unit_from_query(#[case] raw: Option<&str>, #[case] expected: TemperatureUnit) {
        assert_eq!(TemperatureUnit::from_query(raw), expected);
    }

    #[test]
    fn test_unit_recognition() {
        assert!(TemperatureUnit::is_recognized("Fahrenheit"));
        assert!(!TemperatureUnit::is_recognized("farenheit"));
    }

    #[test]
    fn test_forecast_day_wire_names() {
        let day = ForecastDay {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            max: 20.0,
            min: 10.0,
            wind_speed: 12.0,
            wind_gust: 25.0,
            humidity: 55.0,
            precipitation_probability: 30.0,
            rain_sum: 2.0,
            weather_text: "Rainy".to_string(),
            weather_icon: "<i></i>".to_string(),
        };
        let value = serde_json::to_value(&day).unwrap();
        assert_eq!(value["date"], "2024-05-01");
        assert_eq!(value["precipitation"], 30.0);
        assert_eq!(value["rain"], 2.0);
        assert!(value.get("precipitation_probability").is_none());
    }
}
