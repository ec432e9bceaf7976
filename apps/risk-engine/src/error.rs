//! Structured error handling for the risk engine.
//!
//! Errors fall into four categories: input validation (rejected at the HTTP
//! boundary), degraded external signals (never errors, resolved to defaults
//! inside the scorers), store unavailability, and internal errors whose
//! cause is logged but never echoed to the caller.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::ports::HistoryStoreError;

/// Error codes for the risk engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Malformed request or missing required fields.
    InvalidRequest,
    /// Missing or mismatched bearer credentials.
    Unauthorized,
    /// History store could not be reached.
    StoreUnavailable,
    /// Unexpected server error.
    InternalError,
}

impl ErrorCode {
    /// HTTP status for this error.
    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable reason string for the wire.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

/// An error surfaced to HTTP callers.
#[derive(Debug, Error)]
#[error("[{}] {message}", .code.reason())]
pub struct EngineError {
    code: ErrorCode,
    message: String,
}

impl EngineError {
    /// Create a new engine error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid request format.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Missing or mismatched credentials.
    #[must_use]
    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::Unauthorized, "Invalid authentication credentials")
    }

    /// Internal error with a generic message; the cause must be logged by
    /// the caller, never forwarded.
    #[must_use]
    pub fn internal() -> Self {
        Self::new(ErrorCode::InternalError, "Internal server error")
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<HistoryStoreError> for EngineError {
    fn from(error: HistoryStoreError) -> Self {
        tracing::error!(error = %error, "History store unavailable");
        Self::new(ErrorCode::StoreUnavailable, "History store unavailable")
    }
}

/// JSON error body returned to HTTP callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable error code string.
    pub code: String,
    /// Human-readable message; generic for internal errors.
    pub message: String,
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.code.reason().to_string(),
            message: self.message,
        };
        (self.code.http_status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_map_to_http_statuses() {
        assert_eq!(
            ErrorCode::InvalidRequest.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::Unauthorized.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::StoreUnavailable.http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn display_includes_reason_and_message() {
        let error = EngineError::invalid_request("user_id must not be empty");
        assert_eq!(
            error.to_string(),
            "[INVALID_REQUEST] user_id must not be empty"
        );
    }

    #[test]
    fn store_errors_surface_without_cause_details() {
        let error: EngineError =
            HistoryStoreError::Unavailable("connection refused to 10.0.0.7".to_string()).into();
        assert_eq!(error.code(), ErrorCode::StoreUnavailable);
        assert!(!error.message().contains("10.0.0.7"));
    }
}
