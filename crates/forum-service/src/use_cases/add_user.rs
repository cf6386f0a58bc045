//! Register an account

use std::sync::Arc;

use forum_core::entities::{RegisterUser, RegisteredUser};
use forum_core::error::DomainResult;
use forum_core::traits::{PasswordHash, UserRepository};
use serde_json::Value;
use tracing::{info, instrument};

pub struct AddUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hash: Arc<dyn PasswordHash>,
}

impl AddUserUseCase {
    pub fn new(user_repository: Arc<dyn UserRepository>, password_hash: Arc<dyn PasswordHash>) -> Self {
        Self {
            user_repository,
            password_hash,
        }
    }

    /// The password is hashed before it reaches storage
    #[instrument(skip_all)]
    pub async fn execute(&self, payload: &Value) -> DomainResult<RegisteredUser> {
        let register_user = RegisterUser::new(payload)?;

        self.user_repository
            .verify_available_username(register_user.username())
            .await?;

        let hashed = self.password_hash.hash(register_user.password()).await?;
        let register_user = register_user.with_hashed_password(hashed);

        let registered = self.user_repository.add_user(&register_user).await?;

        info!(user_id = %registered.id(), username = %registered.username(), "User registered");
        Ok(registered)
    }
}
