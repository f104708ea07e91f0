//! Error types and handling for the `ForecastDash` backend

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Main error type for the dashboard backend
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Missing or invalid request parameters
    #[error("{message}")]
    Validation { message: String },

    /// City or coordinates could not be resolved
    #[error("{message}")]
    NotFound { message: String },

    /// Network or HTTP failure while talking to a third-party service
    #[error("HTTP error occurred: {message}")]
    Upstream { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Anything else that went wrong while building a response
    #[error("Unexpected error: {message}")]
    Unexpected { message: String },
}

impl DashboardError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new unexpected error
    pub fn unexpected<S: Into<String>>(message: S) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// HTTP status this error is reported with
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::Validation { .. } => StatusCode::BAD_REQUEST,
            DashboardError::NotFound { .. } => StatusCode::NOT_FOUND,
            DashboardError::Upstream { .. }
            | DashboardError::Config { .. }
            | DashboardError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        // A body that arrived but does not parse is not a transport failure
        if err.is_decode() {
            DashboardError::unexpected(err.to_string())
        } else {
            DashboardError::upstream(err.to_string())
        }
    }
}

impl From<reqwest_middleware::Error> for DashboardError {
    fn from(err: reqwest_middleware::Error) -> Self {
        DashboardError::upstream(err.to_string())
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }
        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}
