//! Raw JSON payload extractor
//!
//! Entities validate their own payloads, so the body is handed over as an
//! untyped [`Value`]. An empty body becomes `null`, which every entity reports
//! as a missing property.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value;

use crate::response::ApiError;

/// Untyped JSON request body
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidBody(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Value::Null));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|_| ApiError::InvalidBody("Request body must be valid JSON.".to_string()))
    }
}
