//! Bearer authentication for the forum routes that need a caller identity.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use forum_common::AppError;

use crate::response::ApiError;
use crate::state::AppState;

/// Caller identity decoded from a valid access token.
///
/// Refresh tokens are signed with a different key and never pass here.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::MissingAuth)?;

        let claims = AppState::from_ref(state)
            .token_manager()
            .verify_access_token(bearer.token())
            .inspect_err(|e| tracing::warn!(error = %e, "rejected bearer token"))?;

        Ok(Self {
            id: claims.id,
            username: claims.username,
        })
    }
}
