//! Soft-delete a reply

use std::sync::Arc;

use forum_core::error::DomainResult;
use forum_core::traits::{CommentRepository, ReplyRepository, ThreadRepository};
use tracing::{info, instrument};

pub struct DeleteReplyUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl DeleteReplyUseCase {
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

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
        owner: &str,
    ) -> DomainResult<()> {
        self.thread_repository.verify_thread_exist(thread_id).await?;
        self.comment_repository
            .verify_comment_exist(thread_id, comment_id)
            .await?;
        self.reply_repository
            .verify_reply_exist(thread_id, comment_id, reply_id)
            .await?;
        self.reply_repository
            .verify_reply_owner(thread_id, comment_id, reply_id, owner)
            .await?;
        self.reply_repository
            .delete_reply(thread_id, comment_id, reply_id)
            .await?;

        info!(comment_id = %comment_id, reply_id = %reply_id, "Reply deleted");
        Ok(())
    }
}
