//! Thread detail view - a thread with its comments, replies, and like counts
//!
//! Views keep the stored content together with its soft-delete flag. The
//! placeholder shown for deleted content is derived when a view is read or
//! serialized, so the stored text is never overwritten.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::comment::CommentRecord;
use super::payload::Payload;
use super::reply::ReplyRecord;
use super::thread::ThreadRecord;
use crate::error::{DomainError, DomainResult};

/// Content shown in place of a soft-deleted comment
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

/// Content shown in place of a soft-deleted reply
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

// ============================================================================
// ReplyView
// ============================================================================

/// A reply as presented inside its parent comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyView {
    id: String,
    content: String,
    date: String,
    username: String,
    is_delete: bool,
}

impl ReplyView {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Content as readers see it
    pub fn content(&self) -> &str {
        if self.is_delete {
            DELETED_REPLY_CONTENT
        } else {
            &self.content
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_delete(&self) -> bool {
        self.is_delete
    }
}

/// The comment reference only drives grouping and is not part of the view.
impl From<ReplyRecord> for ReplyView {
    fn from(record: ReplyRecord) -> Self {
        Self {
            id: record.id,
            content: record.content,
            date: record.date,
            username: record.username,
            is_delete: record.is_delete,
        }
    }
}

#[derive(Serialize)]
struct ReplyWire<'a> {
    id: &'a str,
    content: &'a str,
    date: &'a str,
    username: &'a str,
}

impl Serialize for ReplyView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ReplyWire {
            id: &self.id,
            content: self.content(),
            date: &self.date,
            username: &self.username,
        }
        .serialize(serializer)
    }
}

// ============================================================================
// CommentView
// ============================================================================

/// A comment with its replies and like count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    id: String,
    username: String,
    date: String,
    content: String,
    is_delete: bool,
    replies: Vec<ReplyView>,
    like_count: i64,
}

impl CommentView {
    pub fn new(record: CommentRecord, replies: Vec<ReplyView>, like_count: i64) -> Self {
        Self {
            id: record.id,
            username: record.username,
            date: record.date,
            content: record.content,
            is_delete: record.is_delete,
            replies,
            like_count,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Content as readers see it
    pub fn content(&self) -> &str {
        if self.is_delete {
            DELETED_COMMENT_CONTENT
        } else {
            &self.content
        }
    }

    pub fn is_delete(&self) -> bool {
        self.is_delete
    }

    pub fn replies(&self) -> &[ReplyView] {
        &self.replies
    }

    pub fn like_count(&self) -> i64 {
        self.like_count
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CommentWire<'a> {
    id: &'a str,
    username: &'a str,
    date: &'a str,
    content: &'a str,
    replies: &'a [ReplyView],
    like_count: i64,
}

impl Serialize for CommentView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CommentWire {
            id: &self.id,
            username: &self.username,
            date: &self.date,
            content: self.content(),
            replies: &self.replies,
            like_count: self.like_count,
        }
        .serialize(serializer)
    }
}

/// Comment element of a raw thread detail payload
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentPayload {
    id: String,
    username: String,
    date: String,
    content: String,
    #[serde(default)]
    replies: Vec<ReplyPayload>,
    #[serde(default)]
    like_count: i64,
}

#[derive(Deserialize)]
struct ReplyPayload {
    id: String,
    content: String,
    date: String,
    username: String,
}

impl From<CommentPayload> for CommentView {
    fn from(payload: CommentPayload) -> Self {
        Self {
            id: payload.id,
            username: payload.username,
            date: payload.date,
            content: payload.content,
            is_delete: false,
            replies: payload
                .replies
                .into_iter()
                .map(|reply| ReplyView {
                    id: reply.id,
                    content: reply.content,
                    date: reply.date,
                    username: reply.username,
                    is_delete: false,
                })
                .collect(),
            like_count: payload.like_count,
        }
    }
}

// ============================================================================
// ThreadDetail
// ============================================================================

/// Full read model of a thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetail {
    id: String,
    title: String,
    body: String,
    date: String,
    username: String,
    comments: Vec<CommentView>,
}

impl ThreadDetail {
    pub const CODE: &'static str = "THREAD_DETAIL";

    /// Validate a raw payload of shape `{ id, title, body, date, username, comments }`.
    ///
    /// `comments` must be an array; a present but non-array value fails with
    /// [`DomainError::CommentsNotArray`] once the scalar fields have passed.
    pub fn new(payload: &Value) -> DomainResult<Self> {
        let payload = Payload::require(
            Self::CODE,
            payload,
            &["id", "title", "body", "date", "username", "comments"],
        )?;

        let id = payload.string("id")?;
        let title = payload.string("title")?;
        let body = payload.string("body")?;
        let date = payload.string("date")?;
        let username = payload.string("username")?;

        let comments = payload
            .get("comments")
            .and_then(Value::as_array)
            .ok_or(DomainError::CommentsNotArray)?
            .iter()
            .map(|comment| {
                CommentPayload::deserialize(comment)
                    .map(CommentView::from)
                    .map_err(|_| DomainError::TypeMismatch(Self::CODE))
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self {
            id,
            title,
            body,
            date,
            username,
            comments,
        })
    }

    /// Combine a stored thread with its already aggregated comments
    pub fn assemble(thread: ThreadRecord, comments: Vec<CommentView>) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.date,
            username: thread.username,
            comments,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn comments(&self) -> &[CommentView] {
        &self.comments
    }
}
