//! Application error types
//!
//! Unified error handling for the delivery side of the application.

use forum_core::DomainError;
use serde::Serialize;

/// Message returned to clients for every server-side failure
pub const SERVER_FAILURE_MESSAGE: &str = "There was a failure on our server.";

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Missing authentication")]
    MissingAuth,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    // Client-fixable request errors
    #[error("{0}")]
    Invariant(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::Invariant(_) => 400,

            // 401 Unauthorized
            Self::MissingAuth | Self::InvalidToken | Self::TokenExpired => 401,

            // 404 Not Found
            Self::NotFound(_) => 404,

            // 500 Internal Server Error
            Self::Internal(_) | Self::Config(_) => 500,

            // Untranslated validation codes fall through to 500
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_authorization() {
                    403
                } else if e.is_authentication() {
                    401
                } else if e.is_invariant() {
                    400
                } else {
                    500
                }
            }
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error body returned by the API
///
/// Client errors carry their own message under status `fail`; server errors
/// carry a fixed message under status `error` so internals never leak.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        if err.is_client_error() {
            Self {
                status: "fail",
                message: err.to_string(),
            }
        } else {
            Self {
                status: "error",
                message: SERVER_FAILURE_MESSAGE.to_string(),
            }
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
