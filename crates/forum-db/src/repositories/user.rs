//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{RegisterUser, RegisteredUser};
use forum_core::error::DomainError;
use forum_core::traits::{RepoResult, UserRepository};

use crate::mappers::generate_id;
use crate::models::RegisteredUserModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn verify_available_username(&self, username: &str) -> RepoResult<()> {
        let taken = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)
            ",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        if taken {
            Err(DomainError::UsernameTaken)
        } else {
            Ok(())
        }
    }

    #[instrument(skip(self, register_user), fields(username = %register_user.username()))]
    async fn add_user(&self, register_user: &RegisterUser) -> RepoResult<RegisteredUser> {
        let model = sqlx::query_as::<_, RegisteredUserModel>(
            r"
            INSERT INTO users (id, username, password, fullname)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, fullname
            ",
        )
        .bind(generate_id("user"))
        .bind(register_user.username())
        .bind(register_user.password())
        .bind(register_user.fullname())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UsernameTaken))?;

        RegisteredUser::new(&json!({
            "id": model.id,
            "username": model.username,
            "fullname": model.fullname,
        }))
    }

    #[instrument(skip(self))]
    async fn get_password_by_username(&self, username: &str) -> RepoResult<String> {
        sqlx::query_scalar::<_, String>(
            r"
            SELECT password FROM users WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::UsernameNotFound)
    }

    #[instrument(skip(self))]
    async fn get_id_by_username(&self, username: &str) -> RepoResult<String> {
        sqlx::query_scalar::<_, String>(
            r"
            SELECT id FROM users WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::UsernameNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }
}
