//! Database models - SQLx-compatible structs for PostgreSQL rows

mod comment;
mod like;
mod reply;
mod thread;
mod user;

pub use comment::CommentDetailModel;
pub use like::LikeCountModel;
pub use reply::ReplyDetailModel;
pub use thread::ThreadDetailModel;
pub use user::RegisteredUserModel;
