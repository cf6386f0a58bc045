//! Detail model -> record mappers

use chrono::{DateTime, SecondsFormat, Utc};
use forum_core::entities::{CommentLikeCount, CommentRecord, ReplyRecord, ThreadRecord};

use crate::models::{CommentDetailModel, LikeCountModel, ReplyDetailModel, ThreadDetailModel};

/// ISO-8601 timestamp with millisecond precision, e.g. `2021-08-08T07:19:09.775Z`
pub fn format_timestamp(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<ThreadDetailModel> for ThreadRecord {
    fn from(model: ThreadDetailModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            body: model.body,
            date: format_timestamp(model.date),
            username: model.username,
        }
    }
}

impl From<CommentDetailModel> for CommentRecord {
    fn from(model: CommentDetailModel) -> Self {
        Self {
            id: model.id,
            username: model.username,
            date: format_timestamp(model.date),
            content: model.content,
            is_delete: model.is_delete,
        }
    }
}

impl From<ReplyDetailModel> for ReplyRecord {
    fn from(model: ReplyDetailModel) -> Self {
        Self {
            id: model.id,
            comment_id: model.comment_id,
            content: model.content,
            date: format_timestamp(model.date),
            username: model.username,
            is_delete: model.is_delete,
        }
    }
}

impl From<LikeCountModel> for CommentLikeCount {
    fn from(model: LikeCountModel) -> Self {
        Self::new(model.comment_id, i64::from(model.like_count))
    }
}
