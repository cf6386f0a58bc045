//! Revoke a refresh token

use std::sync::Arc;

use forum_core::error::DomainResult;
use forum_core::traits::AuthenticationRepository;
use serde_json::Value;
use tracing::{info, instrument};

use super::refresh_authentication::refresh_token_from;

pub struct LogoutUserUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
}

impl LogoutUserUseCase {
    pub const CODE: &'static str = "DELETE_AUTHENTICATION_USE_CASE";

    pub fn new(authentication_repository: Arc<dyn AuthenticationRepository>) -> Self {
        Self {
            authentication_repository,
        }
    }

    #[instrument(skip_all)]
    pub async fn execute(&self, payload: &Value) -> DomainResult<()> {
        let refresh_token = refresh_token_from(Self::CODE, payload)?;

        self.authentication_repository
            .check_availability_token(&refresh_token)
            .await?;
        self.authentication_repository
            .delete_token(&refresh_token)
            .await?;

        info!("Refresh token revoked");
        Ok(())
    }
}
