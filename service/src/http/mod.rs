//! HTTP utilities shared across the API surface.
//!
//! This module provides the common error vocabulary, request key
//! verification, and response middleware used by the application server.

pub mod security;

pub use security::{build_security_headers, security_headers_middleware};

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error response body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// An API-level failure carrying the status code and client-facing message.
///
/// Converts into a JSON response of the form `{"error": "..."}` so all
/// endpoints fail with the same shape.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

// Malformed request bodies and query strings surface as 400s with the
// shared error shape instead of Axum's plain-text rejections.

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

/// Verify the shared API key presented by a request.
///
/// Requests without a key (or with an empty one) are rejected before any
/// other parameter validation runs.
///
/// # Errors
/// Returns a 400 `ApiError` when the key is missing, empty, or wrong.
pub fn verify_key(provided: Option<&str>, expected: &str) -> Result<(), ApiError> {
    match provided {
        None | Some("") => Err(ApiError::bad_request("key required")),
        Some(key) if key != expected => Err(ApiError::bad_request("invalid key")),
        Some(_) => Ok(()),
    }
}
