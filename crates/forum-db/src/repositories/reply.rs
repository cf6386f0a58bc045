//! PostgreSQL implementation of ReplyRepository

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{AddedReply, NewReply, ReplyRecord};
use forum_core::error::DomainError;
use forum_core::traits::{ReplyRepository, RepoResult};

use crate::mappers::generate_id;
use crate::models::ReplyDetailModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReplyRepository
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    /// Create a new PgReplyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    #[instrument(skip(self, new_reply))]
    async fn add_reply(
        &self,
        thread_id: &str,
        comment_id: &str,
        new_reply: &NewReply,
        owner: &str,
    ) -> RepoResult<AddedReply> {
        let (id, content, owner) = sqlx::query_as::<_, (String, String, String)>(
            r#"
            INSERT INTO replies (id, thread_id, comment_id, owner, content)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, content, owner
            "#,
        )
        .bind(generate_id("reply"))
        .bind(thread_id)
        .bind(comment_id)
        .bind(owner)
        .bind(new_reply.content())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        AddedReply::new(&json!({ "id": id, "content": content, "owner": owner }))
    }

    #[instrument(skip(self))]
    async fn verify_reply_exist(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> RepoResult<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM replies WHERE id = $1 AND comment_id = $2 AND thread_id = $3
            )
            "#,
        )
        .bind(reply_id)
        .bind(comment_id)
        .bind(thread_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        if exists {
            Ok(())
        } else {
            Err(DomainError::ReplyNotFound)
        }
    }

    #[instrument(skip(self))]
    async fn verify_reply_owner(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
        owner: &str,
    ) -> RepoResult<()> {
        let stored_owner = sqlx::query_scalar::<_, String>(
            r#"
            SELECT owner FROM replies WHERE id = $1 AND comment_id = $2 AND thread_id = $3
            "#,
        )
        .bind(reply_id)
        .bind(comment_id)
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::ReplyNotFound)?;

        if stored_owner == owner {
            Ok(())
        } else {
            Err(DomainError::NotReplyOwner)
        }
    }

    #[instrument(skip(self))]
    async fn delete_reply(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE replies SET is_delete = TRUE
            WHERE id = $1 AND comment_id = $2 AND thread_id = $3
            "#,
        )
        .bind(reply_id)
        .bind(comment_id)
        .bind(thread_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ReplyNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_replies_by_thread_id(&self, thread_id: &str) -> RepoResult<Vec<ReplyRecord>> {
        let results = sqlx::query_as::<_, ReplyDetailModel>(
            r#"
            SELECT replies.id, replies.comment_id, replies.content, replies.date,
                   users.username, replies.is_delete
            FROM replies
            INNER JOIN users ON users.id = replies.owner
            WHERE replies.thread_id = $1
            ORDER BY replies.date ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReplyRecord::from).collect())
    }
}
