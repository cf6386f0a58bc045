//! # forum-core
//!
//! Domain layer containing entities, payload validation, and the collaborator
//! traits the use cases depend on.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    AddedComment, AddedReply, AddedThread, CommentLikeCount, CommentRecord, CommentView, NewAuth,
    NewComment, NewReply, NewThread, RegisterUser, RegisteredUser, ReplyRecord, ReplyView,
    ThreadDetail, ThreadRecord, TokenPayload, UserLogin, DELETED_COMMENT_CONTENT,
    DELETED_REPLY_CONTENT,
};
pub use error::{DomainError, DomainResult};
pub use traits::{
    AuthenticationRepository, AuthenticationTokenManager, CommentRepository, LikeRepository,
    PasswordHash, ReplyRepository, RepoResult, ThreadRepository, UserRepository,
};
