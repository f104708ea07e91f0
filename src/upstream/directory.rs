//! Country/city directory response structures

use serde::Deserialize;

use crate::models::CountryCities;

/// `{"error": false, "msg": "...", "data": [{"country": "...", "cities": [...]}]}`
#[derive(Debug, Deserialize)]
pub struct DirectoryResponse {
    #[serde(default)]
    pub data: Vec<CountryCities>,
}

impl DirectoryResponse {
    #[must_use]
    pub fn countries(&self) -> Vec<String> {
        self.data.iter().map(|entry| entry.country.clone()).collect()
    }

    /// Cities of the first entry matching `country`, ignoring case
    #[must_use]
    pub fn cities_of(&self, country: &str) -> Vec<String> {
        self.data
            .iter()
            .find(|entry| entry.matches(country))
            .map(|entry| entry.cities.clone())
            .unwrap_or_default()
    }
}
