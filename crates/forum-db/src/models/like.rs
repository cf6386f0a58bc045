//! Like database model

use sqlx::FromRow;

/// Aggregated like count (from query)
#[derive(Debug, Clone, FromRow)]
pub struct LikeCountModel {
    pub comment_id: String,
    pub like_count: i32,
}
