//! Location model for geographic coordinates and directory entries

use serde::{Deserialize, Serialize};

/// Location coordinates
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A country together with its cities, in directory order
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CountryCities {
    pub country: String,
    #[serde(default)]
    pub cities: Vec<String>,
}

impl CountryCities {
    /// Case-insensitive country name match
    #[must_use]
    pub fn matches(&self, country: &str) -> bool {
        self.country.to_lowercase() == country.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coordinates() {
        let coords = Coordinates::new(51.044_712, -114.071_9);
        assert_eq!(coords.format_coordinates(), "51.0447, -114.0719");
    }

    #[test]
    fn test_country_match_ignores_case() {
        let entry = CountryCities {
            country: "Canada".to_string(),
            cities: vec!["Calgary".to_string()],
        };
        assert!(entry.matches("canada"));
        assert!(entry.matches("CANADA"));
        assert!(!entry.matches("Canad"));
    }
}
