//! User handlers

use axum::extract::State;
use serde_json::json;

use crate::extractors::JsonPayload;
use crate::response::{ApiResult, Created, Success};
use crate::state::AppState;

/// Register a new user
///
/// POST /users
pub async fn post_user(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> ApiResult<Created<Success<serde_json::Value>>> {
    let added_user = state.service_context().add_user().execute(&payload).await?;
    Ok(Created(Success(json!({ "addedUser": added_user }))))
}
