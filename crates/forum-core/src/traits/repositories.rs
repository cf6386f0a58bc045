//! Repository traits (ports) - define the interface for data access
//!
//! Use cases depend on these capabilities only; the infrastructure layer
//! provides one implementation per storage backend.

use async_trait::async_trait;

use crate::entities::{
    AddedComment, AddedReply, AddedThread, CommentLikeCount, CommentRecord, NewComment, NewReply,
    NewThread, RegisterUser, RegisteredUser, ReplyRecord, ThreadRecord,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Thread Repository
// ============================================================================

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Persist a thread owned by `owner`
    async fn add_thread(&self, new_thread: &NewThread, owner: &str) -> RepoResult<AddedThread>;

    /// Fails with [`DomainError::ThreadNotFound`] when the thread does not exist
    async fn verify_thread_exist(&self, thread_id: &str) -> RepoResult<()>;

    /// Scalar fields of a thread joined with its author's username
    async fn get_thread_by_id(&self, thread_id: &str) -> RepoResult<ThreadRecord>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(
        &self,
        thread_id: &str,
        new_comment: &NewComment,
        owner: &str,
    ) -> RepoResult<AddedComment>;

    /// Fails with [`DomainError::CommentNotFound`] when the comment is not in the thread
    async fn verify_comment_exist(&self, thread_id: &str, comment_id: &str) -> RepoResult<()>;

    /// Fails with [`DomainError::NotCommentOwner`] when `owner` did not write the comment
    async fn verify_comment_owner(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> RepoResult<()>;

    /// Soft delete: the row and its content are kept
    async fn delete_comment(&self, thread_id: &str, comment_id: &str) -> RepoResult<()>;

    /// All comments of a thread in storage order, including soft-deleted ones
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> RepoResult<Vec<CommentRecord>>;
}

// ============================================================================
// Reply Repository
// ============================================================================

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(
        &self,
        thread_id: &str,
        comment_id: &str,
        new_reply: &NewReply,
        owner: &str,
    ) -> RepoResult<AddedReply>;

    /// Fails with [`DomainError::ReplyNotFound`] when the reply is not under the comment
    async fn verify_reply_exist(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> RepoResult<()>;

    /// Fails with [`DomainError::NotReplyOwner`] when `owner` did not write the reply
    async fn verify_reply_owner(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
        owner: &str,
    ) -> RepoResult<()>;

    /// Soft delete: the row and its content are kept
    async fn delete_reply(&self, thread_id: &str, comment_id: &str, reply_id: &str)
        -> RepoResult<()>;

    /// All replies of every comment in a thread, in storage order
    async fn get_replies_by_thread_id(&self, thread_id: &str) -> RepoResult<Vec<ReplyRecord>>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Whether `owner` currently likes the comment
    async fn verify_like_exist(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> RepoResult<bool>;

    async fn add_like(&self, thread_id: &str, comment_id: &str, owner: &str) -> RepoResult<()>;

    async fn delete_like(&self, thread_id: &str, comment_id: &str, owner: &str) -> RepoResult<()>;

    /// Like counts grouped by comment; comments without likes have no entry
    async fn get_likes_by_thread_id(&self, thread_id: &str) -> RepoResult<Vec<CommentLikeCount>>;
}

// ============================================================================
// User Repository
// ============================================================================

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with [`DomainError::UsernameTaken`] when the username is registered
    async fn verify_available_username(&self, username: &str) -> RepoResult<()>;

    /// Persist a registration whose password is already hashed
    async fn add_user(&self, register_user: &RegisterUser) -> RepoResult<RegisteredUser>;

    /// Fails with [`DomainError::UsernameNotFound`] for unknown usernames
    async fn get_password_by_username(&self, username: &str) -> RepoResult<String>;

    /// Fails with [`DomainError::UsernameNotFound`] for unknown usernames
    async fn get_id_by_username(&self, username: &str) -> RepoResult<String>;
}

// ============================================================================
// Authentication Repository
// ============================================================================

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    async fn add_token(&self, token: &str) -> RepoResult<()>;

    /// Fails with [`DomainError::RefreshTokenNotFound`] when the token is not stored
    async fn check_availability_token(&self, token: &str) -> RepoResult<()>;

    async fn delete_token(&self, token: &str) -> RepoResult<()>;
}
