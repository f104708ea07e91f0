//! HTTP client with bounded retries for transient upstream failures
//!
//! Retries 429, 500, 502, 503, 504 and connection-level failures with
//! exponential backoff (1s, 2s, 4s by default). Only GET requests go through
//! this client. Any other status is handed back to the caller untouched.

use reqwest::StatusCode;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{
    Jitter, RetryTransientMiddleware, Retryable, RetryableStrategy, default_on_request_failure,
    policies::ExponentialBackoff,
};

use crate::config::UpstreamConfig;
use crate::{DashboardError, Result};

const RETRY_STATUSES: [StatusCode; 5] = [
    StatusCode::TOO_MANY_REQUESTS,
    StatusCode::INTERNAL_SERVER_ERROR,
    StatusCode::BAD_GATEWAY,
    StatusCode::SERVICE_UNAVAILABLE,
    StatusCode::GATEWAY_TIMEOUT,
];

/// Retry decision limited to the transient status list
pub struct TransientStatusStrategy;

impl RetryableStrategy for TransientStatusStrategy {
    fn handle(
        &self,
        res: &std::result::Result<reqwest::Response, reqwest_middleware::Error>,
    ) -> Option<Retryable> {
        match res {
            Ok(response) if is_transient(response.status()) => {
                tracing::warn!(status = %response.status(), url = %response.url(), "Transient upstream status, retrying");
                Some(Retryable::Transient)
            }
            Ok(_) => None,
            Err(error) => default_on_request_failure(error),
        }
    }
}

#[must_use]
pub fn is_transient(status: StatusCode) -> bool {
    RETRY_STATUSES.contains(&status)
}

/// Build the shared outbound client from the upstream settings
pub fn build_client(config: &UpstreamConfig) -> Result<ClientWithMiddleware> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout())
        .user_agent(concat!("ForecastDash/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| DashboardError::config(format!("Failed to create HTTP client: {e}")))?;

    let policy = ExponentialBackoff::builder()
        .retry_bounds(config.initial_backoff(), config.max_backoff())
        .jitter(Jitter::None)
        .base(2)
        .build_with_max_retries(config.max_retries);

    Ok(ClientBuilder::new(client)
        .with(RetryTransientMiddleware::new_with_policy_and_strategy(
            policy,
            TransientStatusStrategy,
        ))
        .build())
}
