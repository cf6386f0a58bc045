//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// Validation variants display as structured codes (`NEW_THREAD.NOT_CONTAIN_NEEDED_PROPERTY`)
/// which the delivery layer translates into client-facing messages. Every other
/// variant displays a message that is already safe to show to a client.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Payload Validation Errors (structured codes)
    // =========================================================================
    #[error("{0}.NOT_CONTAIN_NEEDED_PROPERTY")]
    MissingProperty(&'static str),

    #[error("{0}.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    TypeMismatch(&'static str),

    #[error("THREAD_DETAIL.COMMENTS_NOT_ARRAY")]
    CommentsNotArray,

    #[error("REGISTER_USER.USERNAME_LIMIT_CHAR")]
    UsernameLimitChar,

    #[error("REGISTER_USER.USERNAME_CONTAIN_RESTRICTED_CHARACTER")]
    UsernameRestrictedCharacter,

    #[error("{0}.NOT_CONTAIN_REFRESH_TOKEN")]
    MissingRefreshToken(&'static str),

    #[error("{0}.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION")]
    RefreshTokenTypeMismatch(&'static str),

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Thread not found.")]
    ThreadNotFound,

    #[error("Comment not found.")]
    CommentNotFound,

    #[error("Reply not found.")]
    ReplyNotFound,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("You are not allowed to delete this comment.")]
    NotCommentOwner,

    #[error("You are not allowed to delete this reply.")]
    NotReplyOwner,

    // =========================================================================
    // Authentication Errors
    // =========================================================================
    #[error("The credentials you entered are incorrect.")]
    InvalidCredentials,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Username is not available.")]
    UsernameTaken,

    #[error("Username not found.")]
    UsernameNotFound,

    #[error("Refresh token not found in database.")]
    RefreshTokenNotFound,

    #[error("Refresh token is invalid.")]
    InvalidRefreshToken,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Check if this is a payload validation error carrying a structured code
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingProperty(_)
                | Self::TypeMismatch(_)
                | Self::CommentsNotArray
                | Self::UsernameLimitChar
                | Self::UsernameRestrictedCharacter
                | Self::MissingRefreshToken(_)
                | Self::RefreshTokenTypeMismatch(_)
        )
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ThreadNotFound | Self::CommentNotFound | Self::ReplyNotFound
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotCommentOwner | Self::NotReplyOwner)
    }

    /// Check if this is an authentication error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    /// Check if this error violates a business rule the client can fix
    pub fn is_invariant(&self) -> bool {
        matches!(
            self,
            Self::UsernameTaken
                | Self::UsernameNotFound
                | Self::RefreshTokenNotFound
                | Self::InvalidRefreshToken
        )
    }

    /// Check if the message of this error can be shown to a client as-is.
    ///
    /// Validation codes are excluded: they only become client errors once
    /// translated at the delivery boundary.
    pub fn is_client_error(&self) -> bool {
        self.is_not_found()
            || self.is_authorization()
            || self.is_authentication()
            || self.is_invariant()
    }
}
