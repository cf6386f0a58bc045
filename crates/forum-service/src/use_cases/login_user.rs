//! Exchange credentials for a token pair

use std::sync::Arc;

use forum_core::entities::{NewAuth, TokenPayload, UserLogin};
use forum_core::error::DomainResult;
use forum_core::traits::{
    AuthenticationRepository, AuthenticationTokenManager, PasswordHash, UserRepository,
};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

pub struct LoginUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    authentication_repository: Arc<dyn AuthenticationRepository>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
    password_hash: Arc<dyn PasswordHash>,
}

impl LoginUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        authentication_repository: Arc<dyn AuthenticationRepository>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
        password_hash: Arc<dyn PasswordHash>,
    ) -> Self {
        Self {
            user_repository,
            authentication_repository,
            token_manager,
            password_hash,
        }
    }

    /// The issued refresh token is stored so it can be refreshed or revoked later
    #[instrument(skip_all)]
    pub async fn execute(&self, payload: &Value) -> DomainResult<NewAuth> {
        let login = UserLogin::new(payload)?;

        let hashed = self
            .user_repository
            .get_password_by_username(login.username())
            .await?;
        self.password_hash
            .compare_password(login.password(), &hashed)
            .await
            .inspect_err(|_| warn!(username = %login.username(), "Login rejected"))?;

        let id = self.user_repository.get_id_by_username(login.username()).await?;
        let token_payload = TokenPayload::new(login.username(), id);

        let access_token = self.token_manager.create_access_token(&token_payload)?;
        let refresh_token = self.token_manager.create_refresh_token(&token_payload)?;
        let new_auth = NewAuth::new(&json!({
            "accessToken": access_token,
            "refreshToken": refresh_token,
        }))?;

        self.authentication_repository
            .add_token(new_auth.refresh_token())
            .await?;

        info!(user_id = %token_payload.id, "User logged in");
        Ok(new_auth)
    }
}
