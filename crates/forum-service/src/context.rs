//! Service context - dependency container for the use cases
//!
//! Every collaborator is passed in explicitly; nothing is resolved by name
//! at runtime. Use cases are cheap to build from the shared `Arc`s.

use std::sync::Arc;

use forum_core::traits::{
    AuthenticationRepository, AuthenticationTokenManager, CommentRepository, LikeRepository,
    PasswordHash, ReplyRepository, ThreadRepository, UserRepository,
};
use thiserror::Error;

use crate::use_cases::{
    AddCommentUseCase, AddReplyUseCase, AddThreadUseCase, AddUserUseCase, DeleteCommentUseCase,
    DeleteReplyUseCase, GetThreadByIdUseCase, LikeCommentUseCase, LoginUserUseCase,
    LogoutUserUseCase, RefreshAuthenticationUseCase,
};

/// Raised when the context is built without one of its collaborators
#[derive(Debug, Error)]
#[error("{0} is required")]
pub struct MissingDependency(pub &'static str);

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    thread_repo: Arc<dyn ThreadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reply_repo: Arc<dyn ReplyRepository>,
    like_repo: Arc<dyn LikeRepository>,
    user_repo: Arc<dyn UserRepository>,
    authentication_repo: Arc<dyn AuthenticationRepository>,

    // Security
    password_hash: Arc<dyn PasswordHash>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
}

impl ServiceContext {
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Threads ===

    pub fn add_thread(&self) -> AddThreadUseCase {
        AddThreadUseCase::new(self.thread_repo.clone())
    }

    pub fn get_thread_by_id(&self) -> GetThreadByIdUseCase {
        GetThreadByIdUseCase::new(
            self.thread_repo.clone(),
            self.comment_repo.clone(),
            self.reply_repo.clone(),
            self.like_repo.clone(),
        )
    }

    // === Comments ===

    pub fn add_comment(&self) -> AddCommentUseCase {
        AddCommentUseCase::new(self.thread_repo.clone(), self.comment_repo.clone())
    }

    pub fn delete_comment(&self) -> DeleteCommentUseCase {
        DeleteCommentUseCase::new(self.thread_repo.clone(), self.comment_repo.clone())
    }

    pub fn like_comment(&self) -> LikeCommentUseCase {
        LikeCommentUseCase::new(
            self.thread_repo.clone(),
            self.comment_repo.clone(),
            self.like_repo.clone(),
        )
    }

    // === Replies ===

    pub fn add_reply(&self) -> AddReplyUseCase {
        AddReplyUseCase::new(
            self.thread_repo.clone(),
            self.comment_repo.clone(),
            self.reply_repo.clone(),
        )
    }

    pub fn delete_reply(&self) -> DeleteReplyUseCase {
        DeleteReplyUseCase::new(
            self.thread_repo.clone(),
            self.comment_repo.clone(),
            self.reply_repo.clone(),
        )
    }

    // === Users & Authentication ===

    pub fn add_user(&self) -> AddUserUseCase {
        AddUserUseCase::new(self.user_repo.clone(), self.password_hash.clone())
    }

    pub fn login_user(&self) -> LoginUserUseCase {
        LoginUserUseCase::new(
            self.user_repo.clone(),
            self.authentication_repo.clone(),
            self.token_manager.clone(),
            self.password_hash.clone(),
        )
    }

    pub fn refresh_authentication(&self) -> RefreshAuthenticationUseCase {
        RefreshAuthenticationUseCase::new(
            self.authentication_repo.clone(),
            self.token_manager.clone(),
        )
    }

    pub fn logout_user(&self) -> LogoutUserUseCase {
        LogoutUserUseCase::new(self.authentication_repo.clone())
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("security", &"...")
            .finish()
    }
}

/// Builder for creating a [`ServiceContext`]
#[derive(Default)]
pub struct ServiceContextBuilder {
    thread_repo: Option<Arc<dyn ThreadRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reply_repo: Option<Arc<dyn ReplyRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    authentication_repo: Option<Arc<dyn AuthenticationRepository>>,
    password_hash: Option<Arc<dyn PasswordHash>>,
    token_manager: Option<Arc<dyn AuthenticationTokenManager>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn thread_repo(mut self, repo: Arc<dyn ThreadRepository>) -> Self {
        self.thread_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reply_repo(mut self, repo: Arc<dyn ReplyRepository>) -> Self {
        self.reply_repo = Some(repo);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn authentication_repo(mut self, repo: Arc<dyn AuthenticationRepository>) -> Self {
        self.authentication_repo = Some(repo);
        self
    }

    pub fn password_hash(mut self, hash: Arc<dyn PasswordHash>) -> Self {
        self.password_hash = Some(hash);
        self
    }

    pub fn token_manager(mut self, manager: Arc<dyn AuthenticationTokenManager>) -> Self {
        self.token_manager = Some(manager);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns [`MissingDependency`] naming the first collaborator that was not provided
    pub fn build(self) -> Result<ServiceContext, MissingDependency> {
        Ok(ServiceContext {
            thread_repo: self.thread_repo.ok_or(MissingDependency("thread_repo"))?,
            comment_repo: self.comment_repo.ok_or(MissingDependency("comment_repo"))?,
            reply_repo: self.reply_repo.ok_or(MissingDependency("reply_repo"))?,
            like_repo: self.like_repo.ok_or(MissingDependency("like_repo"))?,
            user_repo: self.user_repo.ok_or(MissingDependency("user_repo"))?,
            authentication_repo: self
                .authentication_repo
                .ok_or(MissingDependency("authentication_repo"))?,
            password_hash: self.password_hash.ok_or(MissingDependency("password_hash"))?,
            token_manager: self.token_manager.ok_or(MissingDependency("token_manager"))?,
        })
    }
}
