//! Toggle a like on a comment
//!
//! The existence check and the insert are not atomic. Two concurrent toggles
//! from the same user can both see "not liked"; the storage uniqueness
//! constraint on `(comment_id, owner)` rejects the second insert.

use std::sync::Arc;

use forum_core::error::DomainResult;
use forum_core::traits::{CommentRepository, LikeRepository, ThreadRepository};
use tracing::{info, instrument};

pub struct LikeCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    like_repository: Arc<dyn LikeRepository>,
}

impl LikeCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        like_repository: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            like_repository,
        }
    }

    /// Add the like when absent, remove it when present
    #[instrument(skip(self))]
    pub async fn execute(&self, thread_id: &str, comment_id: &str, owner: &str) -> DomainResult<()> {
        self.thread_repository.verify_thread_exist(thread_id).await?;
        self.comment_repository
            .verify_comment_exist(thread_id, comment_id)
            .await?;

        let liked = self
            .like_repository
            .verify_like_exist(thread_id, comment_id, owner)
            .await?;

        if liked {
            self.like_repository
                .delete_like(thread_id, comment_id, owner)
                .await?;
            info!(comment_id = %comment_id, owner = %owner, "Like removed");
        } else {
            self.like_repository
                .add_like(thread_id, comment_id, owner)
                .await?;
            info!(comment_id = %comment_id, owner = %owner, "Like added");
        }

        Ok(())
    }
}
