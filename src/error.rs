// SPDX-License-Identifier: MIT

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Este email ya existe")]
    DuplicateEmail,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Spotify auth error: {0}")]
    SpotifyAuth(String),

    #[error("Spotify API error (HTTP {status}): {message}")]
    SpotifyApi { status: u16, message: String },

    #[error("Upstream request failed: {0}")]
    UpstreamRequest(#[from] reqwest::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::DuplicateEmail => (
                StatusCode::BAD_REQUEST,
                "duplicate_email",
                Some(self.to_string()),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::SpotifyAuth(msg) => {
                (StatusCode::BAD_REQUEST, "spotify_auth_error", Some(msg.clone()))
            }
            AppError::SpotifyApi { .. } => (
                StatusCode::BAD_REQUEST,
                "spotify_api_error",
                Some(self.to_string()),
            ),
            AppError::UpstreamRequest(err) => {
                tracing::error!(error = %err, "Upstream request failed");
                (StatusCode::BAD_GATEWAY, "upstream_unreachable", None)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
