//! Error types for sqad-ui

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Operation requires configuration that is absent (501)
    #[error("Not configured: {0}")]
    NotConfigured(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Generic error
    #[error(transparent)]
    Other(#[from] anyhow::Error),

    /// sqad-common error
    #[error("{0}")]
    Common(#[from] sqad_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::NotConfigured(msg) => {
                (StatusCode::NOT_IMPLEMENTED, "NOT_CONFIGURED", msg)
            }
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
            ApiError::Other(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                err.to_string(),
            ),
            ApiError::Common(err) => return common_error_response(err),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Map a shared error onto an HTTP response
///
/// Backend failures surface as 502 so the browser can distinguish
/// "the dashboard broke" from "the evaluation backend broke".
fn common_error_response(err: sqad_common::Error) -> Response {
    use sqad_common::Error;

    let (status, error_code) = match &err {
        Error::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        Error::InvalidInput(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        Error::BackendStatus { status, .. } if *status == 404 => {
            (StatusCode::NOT_FOUND, "NOT_FOUND")
        }
        Error::BackendStatus { .. } => (StatusCode::BAD_GATEWAY, "BACKEND_ERROR"),
        Error::Network(_) => (StatusCode::BAD_GATEWAY, "BACKEND_UNREACHABLE"),
        Error::Decode(_) => (StatusCode::BAD_GATEWAY, "BACKEND_ERROR"),
        Error::Config(_) | Error::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    };

    let body = Json(json!({
        "error": {
            "code": error_code,
            "message": err.to_string(),
        }
    }));

    (status, body).into_response()
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
