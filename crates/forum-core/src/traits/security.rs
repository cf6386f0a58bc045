//! Security collaborators - password hashing and token issuing

use async_trait::async_trait;

use crate::entities::TokenPayload;
use crate::error::DomainResult;

/// One-way password hashing
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PasswordHash: Send + Sync {
    async fn hash(&self, password: &str) -> DomainResult<String>;

    /// Fails with [`crate::DomainError::InvalidCredentials`] when the password does not match
    async fn compare_password(&self, password: &str, hashed: &str) -> DomainResult<()>;
}

/// Issues and checks signed access and refresh tokens
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait AuthenticationTokenManager: Send + Sync {
    fn create_access_token(&self, payload: &TokenPayload) -> DomainResult<String>;

    fn create_refresh_token(&self, payload: &TokenPayload) -> DomainResult<String>;

    /// Fails with [`crate::DomainError::InvalidRefreshToken`] on a bad signature or expiry
    fn verify_refresh_token(&self, token: &str) -> DomainResult<()>;

    /// Read the identity from a token without checking its signature
    fn decode_payload(&self, token: &str) -> DomainResult<TokenPayload>;
}
