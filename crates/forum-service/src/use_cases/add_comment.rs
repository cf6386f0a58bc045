//! Comment on a thread

use std::sync::Arc;

use forum_core::entities::{AddedComment, NewComment};
use forum_core::error::DomainResult;
use forum_core::traits::{CommentRepository, ThreadRepository};
use serde_json::Value;
use tracing::{info, instrument};

pub struct AddCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    #[instrument(skip(self, payload))]
    pub async fn execute(
        &self,
        thread_id: &str,
        payload: &Value,
        owner: &str,
    ) -> DomainResult<AddedComment> {
        let new_comment = NewComment::new(payload)?;

        self.thread_repository.verify_thread_exist(thread_id).await?;
        let added = self
            .comment_repository
            .add_comment(thread_id, &new_comment, owner)
            .await?;

        info!(thread_id = %thread_id, comment_id = %added.id(), "Comment added");
        Ok(added)
    }
}
