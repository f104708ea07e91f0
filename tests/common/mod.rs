//! Local stand-in for the directory, geocoding and forecast services

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use forecastdash::config::UpstreamConfig;
use serde_json::{Value, json};

/// Temperature the fake forecast service reports for "now", in Celsius
pub const CURRENT_TEMPERATURE_C: f64 = 12.5;
pub const CURRENT_WINDSPEED_KMH: f64 = 14.4;

#[derive(Default)]
pub struct FakeUpstream {
    pub directory_hits: AtomicUsize,
    pub geocoding_hits: AtomicUsize,
    pub forecast_hits: AtomicUsize,
    /// `temperature_unit` of every forecast request
    pub forecast_units: Mutex<Vec<String>>,
    /// Statuses answered by the directory before it starts succeeding
    pub directory_failures: Mutex<VecDeque<StatusCode>>,
    /// Answer forecast requests with a 200 whose body is not JSON
    pub garbled_forecast: AtomicBool,
}

impl FakeUpstream {
    pub fn failing_directory(statuses: &[StatusCode]) -> Arc<Self> {
        let fake = Self::default();
        fake.directory_failures
            .lock()
            .unwrap()
            .extend(statuses.iter().copied());
        Arc::new(fake)
    }

    pub fn garbled_forecast() -> Arc<Self> {
        let fake = Self::default();
        fake.garbled_forecast.store(true, Ordering::SeqCst);
        Arc::new(fake)
    }

    pub fn hits(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

fn forecast_body() -> Value {
    json!({
        "latitude": 48.86,
        "longitude": 2.35,
        "timezone": "Europe/Paris",
        "current_weather": {
            "temperature": CURRENT_TEMPERATURE_C,
            "windspeed": CURRENT_WINDSPEED_KMH,
            "winddirection": 250,
            "weathercode": 2
        },
        "daily": {
            "time": ["2024-09-01", "2024-09-02", "2024-09-03", "2024-09-04",
                     "2024-09-05", "2024-09-06", "2024-09-07"],
            "weathercode": [2, 3, 61, 61, 0, 80, 95],
            "temperature_2m_max": [18.2, 17.0, 15.5, 14.9, 19.3, 20.1, 22.4],
            "temperature_2m_min": [9.1, 8.4, 7.7, 6.0, 8.8, 10.2, 12.0],
            "precipitation_probability_mean": [5, 12, 80, 65, 0, 40, 55],
            "precipitation_sum": [0.0, 0.2, 6.4, 3.1, 0.0, 1.5, 4.8],
            "wind_speed_10m_max": [15.1, 18.3, 22.0, 19.5, 9.8, 12.2, 25.6],
            "wind_gusts_10m_max": [30.2, 35.0, 48.1, 40.3, 20.0, 26.5, 55.2],
            "relative_humidity_2m_mean": [71, 74, 88, 85, 63, 70, 79],
            "apparent_temperature_max": [17.5, 15.9, 13.2, 12.8, 18.7, 19.0, 21.1]
        }
    })
}

async fn directory(State(fake): State<Arc<FakeUpstream>>) -> Response {
    fake.directory_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(status) = fake.directory_failures.lock().unwrap().pop_front() {
        return (status, Json(json!({"error": true, "msg": "unavailable"}))).into_response();
    }
    Json(json!({
        "error": false,
        "msg": "countries and cities retrieved",
        "data": [
            {"iso2": "CA", "iso3": "CAN", "country": "Canada", "cities": ["Calgary", "Halifax"]},
            {"iso2": "FR", "iso3": "FRA", "country": "France", "cities": ["Lyon", "Paris"]}
        ]
    }))
    .into_response()
}

async fn geocoding(
    State(fake): State<Arc<FakeUpstream>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    fake.geocoding_hits.fetch_add(1, Ordering::SeqCst);
    match params.get("name").map(String::as_str) {
        Some("Paris") => Json(json!({
            "results": [{"id": 2988507, "name": "Paris", "latitude": 48.85341, "longitude": 2.3488}]
        })),
        _ => Json(json!({"generationtime_ms": 0.4})),
    }
}

async fn forecast(
    State(fake): State<Arc<FakeUpstream>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    fake.forecast_hits.fetch_add(1, Ordering::SeqCst);
    fake.forecast_units
        .lock()
        .unwrap()
        .push(params.get("temperature_unit").cloned().unwrap_or_default());
    if fake.garbled_forecast.load(Ordering::SeqCst) {
        return "<html>upstream maintenance</html>".into_response();
    }
    Json(forecast_body()).into_response()
}

/// Serve the fake on an ephemeral port and return matching client settings
pub async fn spawn(fake: Arc<FakeUpstream>) -> UpstreamConfig {
    let app = Router::new()
        .route("/countries", get(directory))
        .route("/search", get(geocoding))
        .route("/forecast", get(forecast))
        .with_state(fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let base = format!("http://{addr}");
    UpstreamConfig {
        directory_url: format!("{base}/countries"),
        geocoding_url: format!("{base}/search"),
        forecast_url: format!("{base}/forecast"),
        timeout_seconds: 5,
        max_retries: 3,
        initial_backoff_ms: 10,
    }
}
