//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in forum-core.
//! Each repository handles database operations for a specific table.

mod authentication;
mod comment;
mod error;
mod like;
mod reply;
mod thread;
mod user;

pub use authentication::PgAuthenticationRepository;
pub use comment::PgCommentRepository;
pub use like::PgLikeRepository;
pub use reply::PgReplyRepository;
pub use thread::PgThreadRepository;
pub use user::PgUserRepository;
