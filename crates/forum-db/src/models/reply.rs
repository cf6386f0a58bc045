//! Reply database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Reply row joined with the owner's username
#[derive(Debug, Clone, FromRow)]
pub struct ReplyDetailModel {
    pub id: String,
    pub comment_id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub is_delete: bool,
}
