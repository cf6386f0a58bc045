//! Reply entities - replies hang off a comment within a thread

use serde::Serialize;
use serde_json::Value;

use super::payload::Payload;
use crate::error::DomainResult;

/// Reply submitted on a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    content: String,
}

impl NewReply {
    pub const CODE: &'static str = "NEW_REPLY";

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

/// Reply as acknowledged by storage after insertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedReply {
    id: String,
    content: String,
    owner: String,
}

impl AddedReply {
    pub const CODE: &'static str = "ADDED_REPLY";

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

/// Stored reply row for a whole thread; `comment_id` is used for grouping only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRecord {
    pub id: String,
    pub comment_id: String,
    pub content: String,
    pub date: String,
    pub username: String,
    pub is_delete: bool,
}
