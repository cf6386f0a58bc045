//! Comment entities

use serde::Serialize;
use serde_json::Value;

use super::payload::Payload;
use crate::error::DomainResult;

/// Comment submitted on a thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    content: String,
}

impl NewComment {
    pub const CODE: &'static str = "NEW_COMMENT";

    pub fn new(payload: &Value) -> DomainResult<Self> {
        let payload = Payload::require(Self::CODE, payload, &["content"])?;

        Ok(Self {
            content: payload.string("content")?,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Comment as acknowledged by storage after insertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    id: String,
    content: String,
    owner: String,
}

impl AddedComment {
    pub const CODE: &'static str = "ADDED_COMMENT";

    pub fn new(payload: &Value) -> DomainResult<Self> {
        let payload = Payload::require(Self::CODE, payload, &["id", "content", "owner"])?;

        Ok(Self {
            id: payload.string("id")?,
            content: payload.string("content")?,
            owner: payload.string("owner")?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// Stored comment row, content untouched even when soft-deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
    pub is_delete: bool,
}
