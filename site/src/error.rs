//! Error types for the portfolio site
//!
//! This module defines error types for each layer:
//! - `FeedError`: repository feed loading errors (GitHub port and pipeline)
//! - `ConfigError`: profile/config loading errors at startup
//! - `AppError`: HTTP layer errors (rendered as JSON responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors produced while loading the repository feed.
///
/// Every variant ends up as the message of an `Error` load state.
/// Cancellation is not an error; see `LoadOutcome`.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("GitHub API error ({status})")]
    Fetch { status: u16 },

    #[error("Unexpected response from GitHub: {0}")]
    Parse(String),

    #[error("Could not reach GitHub: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GitHub account handle must not be empty")]
    InvalidHandle,
}

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read profile {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid profile {path}: {source}")]
    Invalid {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Profile is missing a GitHub username")]
    MissingHandle,
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
