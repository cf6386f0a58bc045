//! Soft-delete a comment

use std::sync::Arc;

use forum_core::error::DomainResult;
use forum_core::traits::{CommentRepository, ThreadRepository};
use tracing::{info, instrument};

pub struct DeleteCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    /// Only the comment's author may delete it
    #[instrument(skip(self))]
    pub async fn execute(&self, thread_id: &str, comment_id: &str, owner: &str) -> DomainResult<()> {
        self.thread_repository.verify_thread_exist(thread_id).await?;
        self.comment_repository
            .verify_comment_exist(thread_id, comment_id)
            .await?;
        self.comment_repository
            .verify_comment_owner(thread_id, comment_id, owner)
            .await?;
        self.comment_repository
            .delete_comment(thread_id, comment_id)
            .await?;

        info!(thread_id = %thread_id, comment_id = %comment_id, "Comment deleted");
        Ok(())
    }
}
