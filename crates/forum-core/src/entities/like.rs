//! Like aggregates

/// Number of like rows stored for one comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLikeCount {
    pub comment_id: String,
    pub like_count: i64,
}

impl CommentLikeCount {
    pub fn new(comment_id: impl Into<String>, like_count: i64) -> Self {
        Self {
            comment_id: comment_id.into(),
            like_count,
        }
    }
}
