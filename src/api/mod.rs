use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::models::{DataSource, TemperatureUnit, WeatherReport};
use crate::service::WeatherService;
use crate::DashboardError;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WeatherService>,
}

impl AppState {
    pub fn new(service: WeatherService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Raw query pairs in request order. A repeated key resolves to its first value.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Serialize)]
pub struct CountriesBody {
    pub countries: Vec<String>,
}

#[derive(Serialize)]
pub struct CitiesBody {
    pub cities: Vec<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/locations", get(get_locations))
        .route("/cities", get(get_cities))
        .route("/weather", get(get_weather))
        .with_state(state)
}

/// List failures keep the client's expected key, with an empty list
fn list_failure(key: &str, err: &DashboardError) -> Response {
    warn!(error = %err, "Listing {} failed", key);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ key: [], "error": err.user_message() })),
    )
        .into_response()
}

async fn get_locations(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Response {
    let source = DataSource::from_query(params.first("source"));
    match state.service.locations(source).await {
        Ok(countries) => Json(CountriesBody { countries }).into_response(),
        Err(err) => list_failure("countries", &err),
    }
}

async fn get_cities(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Response {
    let source = DataSource::from_query(params.first("source"));
    let country = params.first("country").unwrap_or_default();
    match state.service.cities(source, country).await {
        Ok(cities) => Json(CitiesBody { cities }).into_response(),
        Err(err) => list_failure("cities", &err),
    }
}

async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<WeatherReport>, DashboardError> {
    let source = DataSource::from_query(params.first("source"));
    let raw_unit = params.first("unit");
    if let Some(raw) = raw_unit {
        if !TemperatureUnit::is_recognized(raw) {
            warn!("Unrecognized unit '{}', answering in fahrenheit", raw);
        }
    }
    let unit = TemperatureUnit::from_query(raw_unit);
    let city = params.first("city").unwrap_or_default();

    let report = state.service.weather(source, city, unit).await?;
    Ok(Json(report))
}
