//! JWT token manager
//!
//! Access and refresh tokens are HS256 tokens signed with separate keys.

use chrono::{Duration, Utc};
use forum_core::{AuthenticationTokenManager, DomainError, DomainResult, TokenPayload};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::TokenConfig;
use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    /// User id
    pub id: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    fn new(payload: &TokenPayload, age_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            username: payload.username.clone(),
            id: payload.id.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(age_seconds)).timestamp(),
        }
    }
}

impl From<Claims> for TokenPayload {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            id: claims.id,
        }
    }
}

struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    age_seconds: i64,
}

impl SigningKeys {
    fn new(secret: &str, age_seconds: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            age_seconds,
        }
    }

    fn sign(&self, payload: &TokenPayload) -> DomainResult<String> {
        encode(&Header::default(), &Claims::new(payload, self.age_seconds), &self.encoding)
            .map_err(|e| DomainError::Internal(format!("Failed to encode JWT: {e}")))
    }

    fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding, &Validation::default()).map(|data| data.claims)
    }
}

/// Token manager backed by `jsonwebtoken`
pub struct JwtTokenManager {
    access: SigningKeys,
    refresh: SigningKeys,
}

impl JwtTokenManager {
    #[must_use]
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            access: SigningKeys::new(&config.access_token_key, config.access_token_age),
            refresh: SigningKeys::new(&config.refresh_token_key, config.refresh_token_age),
        }
    }

    /// Validate an access token presented as a bearer credential
    ///
    /// # Errors
    /// Returns `TokenExpired` for an expired token and `InvalidToken` for any other failure
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, AppError> {
        self.access.verify(token).map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AppError::TokenExpired,
            _ => AppError::InvalidToken,
        })
    }
}

impl AuthenticationTokenManager for JwtTokenManager {
    fn create_access_token(&self, payload: &TokenPayload) -> DomainResult<String> {
        self.access.sign(payload)
    }

    fn create_refresh_token(&self, payload: &TokenPayload) -> DomainResult<String> {
        self.refresh.sign(payload)
    }

    fn verify_refresh_token(&self, token: &str) -> DomainResult<()> {
        self.refresh
            .verify(token)
            .map(|_| ())
            .map_err(|_| DomainError::InvalidRefreshToken)
    }

    fn decode_payload(&self, token: &str) -> DomainResult<TokenPayload> {
        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;

        decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims.into())
            .map_err(|_| DomainError::InvalidRefreshToken)
    }
}

impl std::fmt::Debug for JwtTokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenManager")
            .field("access_token_age", &self.access.age_seconds)
            .field("refresh_token_age", &self.refresh.age_seconds)
            .finish_non_exhaustive()
    }
}
