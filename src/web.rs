use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::{self, AppState};
use crate::cache::LookupCache;
use crate::config::DashboardConfig;
use crate::service::WeatherService;
use crate::upstream::HttpUpstream;

/// API routes plus the browser client's static assets
pub fn app(config: &DashboardConfig, state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::router(state)
        .fallback_service(ServeDir::new(&config.server.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Wire the live upstream client to a fresh lookup cache
pub fn build_state(config: &DashboardConfig) -> Result<AppState> {
    let upstream = HttpUpstream::new(config.upstream.clone(), LookupCache::shared())
        .context("Failed to set up upstream client")?;
    Ok(AppState::new(WeatherService::new(Arc::new(upstream))))
}

pub async fn run(config: DashboardConfig) -> Result<()> {
    let state = build_state(&config)?;
    let app = app(&config, state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", config.server.port);
    axum::serve(listener, app).await.context("Web server failed")?;
    Ok(())
}
