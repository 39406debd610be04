//! Client error types.

use paddle_core::{CursorError, SchemaError};

/// Errors that can occur when using the Paddle client.
///
/// API-level failures (`BadRequest`, `NotFound`, `Http`) are kept apart from
/// transport and decoding failures. Nothing is retried; every error reaches
/// the caller as raised.
#[derive(Debug, thiserror::Error)]
pub enum PaddleError {
    /// The API rejected the request (HTTP 400).
    #[error("bad request: {code} - {detail}")]
    BadRequest {
        /// Machine-readable error code.
        code: String,
        /// Human-readable explanation.
        detail: String,
    },

    /// The addressed resource does not exist (HTTP 404).
    #[error("not found: {path}")]
    NotFound {
        /// Path that was requested.
        path: String,
    },

    /// Any other non-success status.
    #[error("HTTP status {status}")]
    Http {
        /// HTTP status code.
        status: u16,
    },

    /// Connection, timeout or other network-level failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected schema.
    #[error("decode error: {0}")]
    Decode(String),

    /// The resource type does not support the operation.
    #[error("unsupported operation: {operation} on {resource}")]
    UnsupportedOperation {
        /// Operation that was attempted.
        operation: &'static str,
        /// Resource type it was attempted on.
        resource: &'static str,
    },

    /// The request could not be built from the given arguments.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<CursorError> for PaddleError {
    fn from(err: CursorError) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<SchemaError> for PaddleError {
    fn from(err: SchemaError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

impl PaddleError {
    /// Whether the error came from the API rather than the network or decoding.
    #[must_use]
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            Self::BadRequest { .. } | Self::NotFound { .. } | Self::Http { .. }
        )
    }

    /// HTTP status behind an API error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest { .. } => Some(400),
            Self::NotFound { .. } => Some(404),
            Self::Http { status } => Some(*status),
            _ => None,
        }
    }
}
