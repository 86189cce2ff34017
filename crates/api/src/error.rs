use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use tracing::error;

/// Errors surfaced to HTTP callers.
///
/// Input errors carry fixed message texts under the `message` key; server
/// errors pass their message through under the `error` key.
#[derive(Debug)]
pub enum ApiError {
    MissingWalletParam,
    InvalidWalletFormat,
    Configuration(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingWalletParam => {
                write!(f, "Missing walletPublicKey query parameter")
            }
            ApiError::InvalidWalletFormat => write!(f, "Invalid walletPublicKey format"),
            ApiError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingWalletParam => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "status": "error",
                    "message": "Missing walletPublicKey query parameter",
                })),
            )
                .into_response(),
            ApiError::InvalidWalletFormat => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "status": "error",
                    "message": "Invalid walletPublicKey format",
                })),
            )
                .into_response(),
            ApiError::Configuration(msg) => {
                error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"status": "error", "error": msg})),
                )
                    .into_response()
            }
            ApiError::Internal(msg) => {
                error!("Request failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"status": "error", "error": msg})),
                )
                    .into_response()
            }
        }
    }
}

impl From<shared::Error> for ApiError {
    fn from(err: shared::Error) -> Self {
        match err {
            shared::Error::InvalidWalletAddress(_) => ApiError::InvalidWalletFormat,
            shared::Error::Configuration(msg) => ApiError::Configuration(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
