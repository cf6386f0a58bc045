//! Domain entities - validated payloads, stored records, and read models

mod auth;
mod comment;
mod like;
mod payload;
mod reply;
mod thread;
mod thread_detail;
mod user;

pub use auth::{NewAuth, TokenPayload};
pub use comment::{AddedComment, CommentRecord, NewComment};
pub use like::CommentLikeCount;
pub use reply::{AddedReply, NewReply, ReplyRecord};
pub use thread::{AddedThread, NewThread, ThreadRecord};
pub use thread_detail::{
    CommentView, ReplyView, ThreadDetail, DELETED_COMMENT_CONTENT, DELETED_REPLY_CONTENT,
};
pub use user::{RegisterUser, RegisteredUser, UserLogin};
