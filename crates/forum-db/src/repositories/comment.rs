//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{AddedComment, CommentRecord, NewComment};
use forum_core::error::DomainError;
use forum_core::traits::{CommentRepository, RepoResult};

use crate::mappers::generate_id;
use crate::models::CommentDetailModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self, new_comment))]
    async fn add_comment(
        &self,
        thread_id: &str,
        new_comment: &NewComment,
        owner: &str,
    ) -> RepoResult<AddedComment> {
        let (id, content, owner) = sqlx::query_as::<_, (String, String, String)>(
            r#"
            INSERT INTO comments (id, thread_id, owner, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, owner
            "#,
        )
        .bind(generate_id("comment"))
        .bind(thread_id)
        .bind(owner)
        .bind(new_comment.content())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        AddedComment::new(&json!({ "id": id, "content": content, "owner": owner }))
    }

    #[instrument(skip(self))]
    async fn verify_comment_exist(&self, thread_id: &str, comment_id: &str) -> RepoResult<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1 AND thread_id = $2)
            "#,
        )
        .bind(comment_id)
        .bind(thread_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        if exists {
            Ok(())
        } else {
            Err(DomainError::CommentNotFound)
        }
    }

    #[instrument(skip(self))]
    async fn verify_comment_owner(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> RepoResult<()> {
        let stored_owner = sqlx::query_scalar::<_, String>(
            r#"
            SELECT owner FROM comments WHERE id = $1 AND thread_id = $2
            "#,
        )
        .bind(comment_id)
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::CommentNotFound)?;

        if stored_owner == owner {
            Ok(())
        } else {
            Err(DomainError::NotCommentOwner)
        }
    }

    #[instrument(skip(self))]
    async fn delete_comment(&self, thread_id: &str, comment_id: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE comments SET is_delete = TRUE WHERE id = $1 AND thread_id = $2
            "#,
        )
        .bind(comment_id)
        .bind(thread_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> RepoResult<Vec<CommentRecord>> {
        let results = sqlx::query_as::<_, CommentDetailModel>(
            r#"
            SELECT comments.id, users.username, comments.date, comments.content, comments.is_delete
            FROM comments
            INNER JOIN users ON users.id = comments.owner
            WHERE comments.thread_id = $1
            ORDER BY comments.date ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CommentRecord::from).collect())
    }
}
