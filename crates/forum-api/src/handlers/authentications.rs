//! Authentication handlers
//!
//! Login issues a token pair, refresh trades a refresh token for a new
//! access token, and logout revokes the refresh token.

use axum::extract::State;
use serde_json::{json, Value};

use crate::extractors::JsonPayload;
use crate::response::{ApiResult, Created, Done, Success};
use crate::state::AppState;

/// Login with username and password
///
/// POST /authentications
pub async fn post_authentication(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> ApiResult<Created<Success<Value>>> {
    let auth = state.service_context().login_user().execute(&payload).await?;
    Ok(Created(Success(json!({
        "accessToken": auth.access_token(),
        "refreshToken": auth.refresh_token(),
    }))))
}

/// Refresh access token
///
/// PUT /authentications
pub async fn put_authentication(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> ApiResult<Success<Value>> {
    let access_token = state
        .service_context()
        .refresh_authentication()
        .execute(&payload)
        .await?;
    Ok(Success(json!({ "accessToken": access_token })))
}

/// Logout
///
/// DELETE /authentications
pub async fn delete_authentication(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> ApiResult<Done> {
    state
        .service_context()
        .logout_user()
        .execute(&payload)
        .await?;
    Ok(Done)
}
