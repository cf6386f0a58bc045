//! Reply to a comment

use std::sync::Arc;

use forum_core::entities::{AddedReply, NewReply};
use forum_core::error::DomainResult;
use forum_core::traits::{CommentRepository, ReplyRepository, ThreadRepository};
use serde_json::Value;
use tracing::{info, instrument};

pub struct AddReplyUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl AddReplyUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
        }
    }

    #[instrument(skip(self, payload))]
    pub async fn execute(
        &self,
        thread_id: &str,
        comment_id: &str,
        payload: &Value,
        owner: &str,
    ) -> DomainResult<AddedReply> {
        let new_reply = NewReply::new(payload)?;

        self.thread_repository.verify_thread_exist(thread_id).await?;
        self.comment_repository
            .verify_comment_exist(thread_id, comment_id)
            .await?;
        let added = self
            .reply_repository
            .add_reply(thread_id, comment_id, &new_reply, owner)
            .await?;

        info!(comment_id = %comment_id, reply_id = %added.id(), "Reply added");
        Ok(added)
    }
}
