//! PostgreSQL implementation of AuthenticationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::error::DomainError;
use forum_core::traits::{AuthenticationRepository, RepoResult};

use super::error::map_db_error;

/// Stores issued refresh tokens so they can be revoked on logout
#[derive(Clone)]
pub struct PgAuthenticationRepository {
    pool: PgPool,
}

impl PgAuthenticationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthenticationRepository for PgAuthenticationRepository {
    #[instrument(skip_all)]
    async fn add_token(&self, token: &str) -> RepoResult<()> {
        sqlx::query("INSERT INTO authentications (token) VALUES ($1)")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip_all)]
    async fn check_availability_token(&self, token: &str) -> RepoResult<()> {
        let stored = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM authentications WHERE token = $1)",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        if stored {
            Ok(())
        } else {
            Err(DomainError::RefreshTokenNotFound)
        }
    }

    #[instrument(skip_all)]
    async fn delete_token(&self, token: &str) -> RepoResult<()> {
        sqlx::query("DELETE FROM authentications WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
