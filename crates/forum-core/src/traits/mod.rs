//! Collaborator traits the use cases depend on

mod repositories;
mod security;

pub use repositories::{
    AuthenticationRepository, CommentRepository, LikeRepository, ReplyRepository, RepoResult,
    ThreadRepository, UserRepository,
};
pub use security::{AuthenticationTokenManager, PasswordHash};

#[cfg(any(test, feature = "testing"))]
pub use repositories::{
    MockAuthenticationRepository, MockCommentRepository, MockLikeRepository, MockReplyRepository,
    MockThreadRepository, MockUserRepository,
};
#[cfg(any(test, feature = "testing"))]
pub use security::{MockAuthenticationTokenManager, MockPasswordHash};
