//! Response types and error handling for API endpoints
//!
//! Successful responses are wrapped as `{"status":"success","data":…}`.
//! Errors go through the domain error translator before they are rendered.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use forum_common::{AppError, DomainErrorTranslator, ErrorResponse};
use forum_core::DomainError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    InvalidBody(String),
}

impl ApiError {
    /// Collapse into the application error that decides status and body
    #[must_use]
    pub fn into_app_error(self) -> AppError {
        match self {
            Self::App(e) => DomainErrorTranslator::translate(e),
            Self::Domain(e) => DomainErrorTranslator::translate(AppError::Domain(e)),
            Self::InvalidBody(message) => AppError::Invariant(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.into_app_error();
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = ?err, "Server error occurred");
        }

        (status, Json(ErrorResponse::from(&err))).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize)]
struct SuccessBody<T> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

/// 200 response with a `data` payload
pub struct Success<T>(pub T);

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        Json(SuccessBody {
            status: "success",
            data: Some(self.0),
        })
        .into_response()
    }
}

/// 200 response carrying only the success status
pub struct Done;

impl IntoResponse for Done {
    fn into_response(self) -> Response {
        Json(SuccessBody::<()> {
            status: "success",
            data: None,
        })
        .into_response()
    }
}

/// Created response (201)
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
