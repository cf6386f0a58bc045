//! Assemble the full read model of a thread

use std::collections::HashMap;
use std::sync::Arc;

use forum_core::entities::{CommentView, ReplyView, ThreadDetail};
use forum_core::error::DomainResult;
use forum_core::traits::{CommentRepository, LikeRepository, ReplyRepository, ThreadRepository};
use tracing::{debug, instrument};

pub struct GetThreadByIdUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
    like_repository: Arc<dyn LikeRepository>,
}

impl GetThreadByIdUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
        like_repository: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
            like_repository,
        }
    }

    /// Thread with its comments in storage order. Each comment carries its
    /// replies in storage order and a like count that defaults to zero.
    #[instrument(skip(self))]
    pub async fn execute(&self, thread_id: &str) -> DomainResult<ThreadDetail> {
        self.thread_repository.verify_thread_exist(thread_id).await?;
        let thread = self.thread_repository.get_thread_by_id(thread_id).await?;

        let (comments, replies, likes) = tokio::try_join!(
            self.comment_repository.get_comments_by_thread_id(thread_id),
            self.reply_repository.get_replies_by_thread_id(thread_id),
            self.like_repository.get_likes_by_thread_id(thread_id),
        )?;

        let like_counts: HashMap<String, i64> = likes
            .into_iter()
            .map(|likes| (likes.comment_id, likes.like_count))
            .collect();

        let mut replies_by_comment: HashMap<String, Vec<ReplyView>> = HashMap::new();
        for reply in replies {
            replies_by_comment
                .entry(reply.comment_id.clone())
                .or_default()
                .push(ReplyView::from(reply));
        }

        let comments: Vec<CommentView> = comments
            .into_iter()
            .map(|comment| {
                let replies = replies_by_comment.remove(&comment.id).unwrap_or_default();
                let like_count = like_counts.get(&comment.id).copied().unwrap_or(0);
                CommentView::new(comment, replies, like_count)
            })
            .collect();

        debug!(thread_id = %thread_id, comments = comments.len(), "Thread detail assembled");
        Ok(ThreadDetail::assemble(thread, comments))
    }
}
