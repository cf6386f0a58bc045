//! Thread entities - payloads for creating a thread and the stored row

use serde::Serialize;
use serde_json::Value;

use super::payload::Payload;
use crate::error::DomainResult;

/// Thread submitted by an authenticated user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    title: String,
    body: String,
}

impl NewThread {
    pub const CODE: &'static str = "NEW_THREAD";

    /// Validate a raw payload of shape `{ title, body }`
    pub fn new(payload: &Value) -> DomainResult<Self> {
        let payload = Payload::require(Self::CODE, payload, &["title", "body"])?;

        Ok(Self {
            title: payload.string("title")?,
            body: payload.string("body")?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Thread as acknowledged by storage after insertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    id: String,
    title: String,
    owner: String,
}

impl AddedThread {
    pub const CODE: &'static str = "ADDED_THREAD";

    /// Validate a raw payload of shape `{ id, title, owner }`
    pub fn new(payload: &Value) -> DomainResult<Self> {
        let payload = Payload::require(Self::CODE, payload, &["id", "title", "owner"])?;

        Ok(Self {
            id: payload.string("id")?,
            title: payload.string("title")?,
            owner: payload.string("owner")?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// Scalar fields of a stored thread joined with its author's username
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRecord {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
}
