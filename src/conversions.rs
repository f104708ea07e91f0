//! Unit conversions and derived temperatures

use crate::models::TemperatureUnit;

/// Round to one decimal place
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    round1(celsius * 9.0 / 5.0 + 32.0)
}

/// Express a Celsius value in `unit`, rounded to one decimal
#[must_use]
pub fn convert_temperature(celsius: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => round1(celsius),
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
    }
}

/// Apparent ("feels like") temperature in Celsius.
///
/// Inputs are Celsius, km/h and percent relative humidity. The vapour term is
/// the Magnus approximation; wind lowers the result linearly in m/s.
#[must_use]
pub fn apparent_temperature(temp_c: f64, wind_kmh: f64, humidity_pct: f64) -> f64 {
    let wind_ms = wind_kmh / 3.6;
    let e = (17.27 * temp_c / (237.7 + temp_c)).exp();
    round1(temp_c + 0.33 * (humidity_pct / 100.0) * 6.105 * e - 0.7 * wind_ms - 4.0)
}
