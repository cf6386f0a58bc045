//! Issue a new access token from a stored refresh token

use std::sync::Arc;

use forum_core::error::{DomainError, DomainResult};
use forum_core::traits::{AuthenticationRepository, AuthenticationTokenManager};
use serde_json::Value;
use tracing::{debug, instrument};

/// Read `refreshToken` from a payload, reporting errors under `code`.
///
/// An empty string counts as missing.
pub(crate) fn refresh_token_from(code: &'static str, payload: &Value) -> DomainResult<String> {
    match payload.get("refreshToken") {
        None | Some(Value::Null) => Err(DomainError::MissingRefreshToken(code)),
        Some(Value::String(token)) if token.is_empty() => {
            Err(DomainError::MissingRefreshToken(code))
        }
        Some(Value::String(token)) => Ok(token.clone()),
        Some(_) => Err(DomainError::RefreshTokenTypeMismatch(code)),
    }
}

pub struct RefreshAuthenticationUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
}

impl RefreshAuthenticationUseCase {
    pub const CODE: &'static str = "REFRESH_AUTHENTICATION_USE_CASE";

    pub fn new(
        authentication_repository: Arc<dyn AuthenticationRepository>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
    ) -> Self {
        Self {
            authentication_repository,
            token_manager,
        }
    }

    /// Returns a fresh access token for the identity in the refresh token
    #[instrument(skip_all)]
    pub async fn execute(&self, payload: &Value) -> DomainResult<String> {
        let refresh_token = refresh_token_from(Self::CODE, payload)?;

        self.token_manager.verify_refresh_token(&refresh_token)?;
        self.authentication_repository
            .check_availability_token(&refresh_token)
            .await?;

        let token_payload = self.token_manager.decode_payload(&refresh_token)?;
        let access_token = self.token_manager.create_access_token(&token_payload)?;

        debug!(user_id = %token_payload.id, "Access token refreshed");
        Ok(access_token)
    }
}
