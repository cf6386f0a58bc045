//! PostgreSQL implementation of ThreadRepository

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{AddedThread, NewThread, ThreadRecord};
use forum_core::error::DomainError;
use forum_core::traits::{RepoResult, ThreadRepository};

use crate::mappers::generate_id;
use crate::models::ThreadDetailModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ThreadRepository
#[derive(Clone)]
pub struct PgThreadRepository {
    pool: PgPool,
}

impl PgThreadRepository {
    /// Create a new PgThreadRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    #[instrument(skip(self, new_thread))]
    async fn add_thread(&self, new_thread: &NewThread, owner: &str) -> RepoResult<AddedThread> {
        let (id, title, owner) = sqlx::query_as::<_, (String, String, String)>(
            r#"
            INSERT INTO threads (id, title, body, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, owner
            "#,
        )
        .bind(generate_id("thread"))
        .bind(new_thread.title())
        .bind(new_thread.body())
        .bind(owner)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        AddedThread::new(&json!({ "id": id, "title": title, "owner": owner }))
    }

    #[instrument(skip(self))]
    async fn verify_thread_exist(&self, thread_id: &str) -> RepoResult<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM threads WHERE id = $1)
            "#,
        )
        .bind(thread_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        if exists {
            Ok(())
        } else {
            Err(DomainError::ThreadNotFound)
        }
    }

    #[instrument(skip(self))]
    async fn get_thread_by_id(&self, thread_id: &str) -> RepoResult<ThreadRecord> {
        let result = sqlx::query_as::<_, ThreadDetailModel>(
            r#"
            SELECT threads.id, threads.title, threads.body, threads.date, users.username
            FROM threads
            INNER JOIN users ON users.id = threads.owner
            WHERE threads.id = $1
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(ThreadRecord::from)
            .ok_or(DomainError::ThreadNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgThreadRepository>();
    }
}
