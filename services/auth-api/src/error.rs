//! Error types for the Auth API service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use roost_auth_core::AuthError;

/// API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Auth error")]
    Auth(#[from] AuthError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            Self::Auth(err) => {
                // Internal failures are logged with their detail; the wire
                // only ever sees the collapsed public message.
                if err.status_code() == 500 {
                    tracing::error!(error = ?err, "internal auth error");
                } else {
                    tracing::debug!(error = ?err, "auth failure");
                }
                (
                    StatusCode::from_u16(err.status_code())
                        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    err.error_code(),
                    err.public_message().to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail { code, message },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
