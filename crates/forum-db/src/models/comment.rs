//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Comment row joined with the owner's username
#[derive(Debug, Clone, FromRow)]
pub struct CommentDetailModel {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_delete: bool,
}
