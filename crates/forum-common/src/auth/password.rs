//! Password hashing and verification
//!
//! Uses Argon2id. Hashing is CPU-bound, so it runs on the blocking thread pool.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash as EncodedHash, PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Argon2,
};
use async_trait::async_trait;
use forum_core::{DomainError, DomainResult, PasswordHash};

fn hash_blocking(password: &str) -> DomainResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DomainError::Internal(format!("Password hashing failed: {e}")))
}

fn verify_blocking(password: &str, hashed: &str) -> DomainResult<()> {
    let parsed = EncodedHash::new(hashed)
        .map_err(|e| DomainError::Internal(format!("Invalid password hash format: {e}")))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| DomainError::InvalidCredentials)
}

async fn run_blocking<T, F>(job: F) -> DomainResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> DomainResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| DomainError::Internal(format!("Password task failed: {e}")))?
}

/// [`PasswordHash`] implementation backed by Argon2id
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHash;

impl Argon2PasswordHash {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PasswordHash for Argon2PasswordHash {
    async fn hash(&self, password: &str) -> DomainResult<String> {
        let password = password.to_owned();
        run_blocking(move || hash_blocking(&password)).await
    }

    async fn compare_password(&self, password: &str, hashed: &str) -> DomainResult<()> {
        let password = password.to_owned();
        let hashed = hashed.to_owned();
        run_blocking(move || verify_blocking(&password, &hashed)).await
    }
}
