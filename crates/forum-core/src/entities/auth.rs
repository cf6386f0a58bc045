//! Authentication entities

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::payload::Payload;
use crate::error::DomainResult;

/// Token pair issued on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuth {
    access_token: String,
    refresh_token: String,
}

impl NewAuth {
    pub const CODE: &'static str = "NEW_AUTH";

    /// Validate a raw payload of shape `{ accessToken, refreshToken }`
    pub fn new(payload: &Value) -> DomainResult<Self> {
        let payload = Payload::require(Self::CODE, payload, &["accessToken", "refreshToken"])?;

        Ok(Self {
            access_token: payload.string("accessToken")?,
            refresh_token: payload.string("refreshToken")?,
        })
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

/// Identity carried inside issued tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub username: String,
    pub id: String,
}

impl TokenPayload {
    pub fn new(username: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            id: id.into(),
        }
    }
}
