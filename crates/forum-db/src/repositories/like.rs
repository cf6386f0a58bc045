//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::CommentLikeCount;
use forum_core::traits::{LikeRepository, RepoResult};

use crate::mappers::generate_id;
use crate::models::LikeCountModel;

use super::error::map_db_error;

/// PostgreSQL implementation of LikeRepository
///
/// `likes_comment` holds a unique `(comment_id, owner)` constraint. When two
/// toggles from the same user race past `verify_like_exist`, the losing
/// `add_like` fails with a database error instead of inserting a second row.
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn verify_like_exist(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM likes_comment
                WHERE thread_id = $1 AND comment_id = $2 AND owner = $3
            )
            "#,
        )
        .bind(thread_id)
        .bind(comment_id)
        .bind(owner)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn add_like(&self, thread_id: &str, comment_id: &str, owner: &str) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO likes_comment (id, thread_id, comment_id, owner)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(generate_id("like"))
        .bind(thread_id)
        .bind(comment_id)
        .bind(owner)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_like(&self, thread_id: &str, comment_id: &str, owner: &str) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM likes_comment WHERE thread_id = $1 AND comment_id = $2 AND owner = $3
            "#,
        )
        .bind(thread_id)
        .bind(comment_id)
        .bind(owner)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_likes_by_thread_id(&self, thread_id: &str) -> RepoResult<Vec<CommentLikeCount>> {
        let results = sqlx::query_as::<_, LikeCountModel>(
            r#"
            SELECT comment_id, COUNT(id)::INTEGER AS like_count
            FROM likes_comment
            WHERE thread_id = $1
            GROUP BY comment_id
            ORDER BY comment_id ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CommentLikeCount::from).collect())
    }
}
