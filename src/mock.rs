//! Demo dataset used when `source=mock`
//!
//! One country with four cities. Daily series are redrawn on every call, so
//! repeated requests for the same city return different forecasts.

use chrono::{Days, NaiveDate};
use rand::RngExt;

use crate::models::forecast::FORECAST_DAYS;
use crate::models::{Coordinates, DailySeries};
use crate::weather_codes::WEATHER_CODES;

/// A city in the mock dataset with its static current readings
#[derive(Debug, Clone, PartialEq)]
pub struct MockCity {
    pub name: &'static str,
    pub coordinates: Coordinates,
    /// Base temperature in Celsius
    pub temperature: f64,
    /// Current wind speed in km/h
    pub windspeed: f64,
}

#[derive(Debug, Clone)]
pub struct MockDataset {
    country: &'static str,
    cities: Vec<MockCity>,
}

impl Default for MockDataset {
    fn default() -> Self {
        Self {
            country: "Canada",
            cities: vec![
                MockCity {
                    name: "Calgary",
                    coordinates: Coordinates::new(51.0447, -114.0719),
                    temperature: 18.0,
                    windspeed: 12.0,
                },
                MockCity {
                    name: "Edmonton",
                    coordinates: Coordinates::new(53.5461, -113.4938),
                    temperature: 10.0,
                    windspeed: 15.0,
                },
                MockCity {
                    name: "Toronto",
                    coordinates: Coordinates::new(43.65107, -79.347015),
                    temperature: 22.0,
                    windspeed: 9.0,
                },
                MockCity {
                    name: "Vancouver",
                    coordinates: Coordinates::new(49.2827, -123.1207),
                    temperature: 16.0,
                    windspeed: 11.0,
                },
            ],
        }
    }
}

impl MockDataset {
    #[must_use]
    pub fn country(&self) -> &str {
        self.country
    }

    #[must_use]
    pub fn city_names(&self) -> Vec<String> {
        self.cities.iter().map(|c| c.name.to_string()).collect()
    }

    /// Exact, case-sensitive city lookup
    #[must_use]
    pub fn city(&self, name: &str) -> Option<&MockCity> {
        self.cities.iter().find(|c| c.name == name)
    }

    /// Current relative humidity, drawn from 10..=80 percent
    pub fn current_humidity<R: RngExt + ?Sized>(&self, rng: &mut R) -> f64 {
        f64::from(rng.random_range(10..=80_i32))
    }

    /// Seven days of randomized values around the city's base temperature,
    /// starting at `today`. Temperatures are Celsius.
    pub fn generate_daily<R: RngExt + ?Sized>(
        &self,
        city: &MockCity,
        today: NaiveDate,
        rng: &mut R,
    ) -> DailySeries {
        let base = city.temperature;
        let mut around = |base: f64, low: i32, high: i32| -> Vec<f64> {
            (0..FORECAST_DAYS)
                .map(|_| base + f64::from(rng.random_range(low..=high)))
                .collect()
        };

        let temperature_max = around(base, 0, 5);
        let temperature_min = around(base, -5, 0);
        let wind_speed_max = around(10.0, 0, 5);
        let wind_gust_max = around(20.0, 0, 10);
        let humidity_mean = around(50.0, 0, 10);
        let apparent_temperature_max = around(base, 0, 3);
        let precipitation_probability = around(0.0, 0, 50);
        let precipitation_sum = around(0.0, 0, 10);

        let weather_code = (0..FORECAST_DAYS)
            .map(|_| u16::from(WEATHER_CODES[rng.random_range(0..WEATHER_CODES.len())].0))
            .collect();

        let time = (0..FORECAST_DAYS as u64)
            .filter_map(|offset| today.checked_add_days(Days::new(offset)))
            .collect();

        DailySeries {
            time,
            temperature_max,
            temperature_min,
            wind_speed_max,
            wind_gust_max,
            humidity_mean,
            apparent_temperature_max,
            precipitation_probability,
            precipitation_sum,
            weather_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 30).unwrap()
    }

    #[test]
    fn test_dataset_shape() {
        let mock = MockDataset::default();
        assert_eq!(mock.country(), "Canada");
        assert_eq!(
            mock.city_names(),
            vec!["Calgary", "Edmonton", "Toronto", "Vancouver"]
        );
        assert!(mock.city("Toronto").is_some());
        assert!(mock.city("toronto").is_none());
    }

    #[test]
    fn test_generated_series_is_bounded() {
        let mock = MockDataset::default();
        let city = mock.city("Edmonton").unwrap();
        let mut rng = rand::rng();

        for _ in 0..50 {
            let daily = mock.generate_daily(city, today(), &mut rng);
            assert_eq!(daily.len(), FORECAST_DAYS);
            assert!(daily.temperature_max.iter().all(|t| (10.0..=15.0).contains(t)));
            assert!(daily.temperature_min.iter().all(|t| (5.0..=10.0).contains(t)));
            assert!(daily.wind_speed_max.iter().all(|w| (10.0..=15.0).contains(w)));
            assert!(daily.wind_gust_max.iter().all(|g| (20.0..=30.0).contains(g)));
            assert!(daily.humidity_mean.iter().all(|h| (0.0..=100.0).contains(h)));
            assert!(daily.precipitation_probability.iter().all(|p| (0.0..=50.0).contains(p)));
            assert!(daily.precipitation_sum.iter().all(|r| (0.0..=10.0).contains(r)));
            assert!(daily.weather_code.iter().all(|code| {
                WEATHER_CODES.iter().any(|(known, _)| u16::from(*known) == *code)
            }));
        }
    }

    #[test]
    fn test_generated_dates_start_today_and_cross_year_end() {
        let mock = MockDataset::default();
        let city = mock.city("Calgary").unwrap();
        let daily = mock.generate_daily(city, today(), &mut rand::rng());

        assert_eq!(daily.time[0], today());
        assert_eq!(daily.time[2], NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert!(daily.time.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_each_draw_is_independent() {
        let mock = MockDataset::default();
        let city = mock.city("Vancouver").unwrap();
        let mut rng = rand::rng();
        let first = mock.generate_daily(city, today(), &mut rng);
        let redrawn = (0..20).any(|_| {
            let next = mock.generate_daily(city, today(), &mut rng);
            next.temperature_max != first.temperature_max
                || next.precipitation_sum != first.precipitation_sum
        });
        assert!(redrawn);
    }

    #[test]
    fn test_current_humidity_range() {
        let mock = MockDataset::default();
        let mut rng = rand::rng();
        for _ in 0..100 {
            let humidity = mock.current_humidity(&mut rng);
            assert!((10.0..=80.0).contains(&humidity));
        }
    }
}
