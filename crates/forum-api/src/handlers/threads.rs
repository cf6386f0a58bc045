//! Thread handlers

use axum::extract::{Path, State};
use serde_json::{json, Value};

use crate::extractors::{AuthUser, JsonPayload};
use crate::response::{ApiResult, Created, Success};
use crate::state::AppState;

/// Create a thread
///
/// POST /threads
pub async fn post_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonPayload(payload): JsonPayload,
) -> ApiResult<Created<Success<Value>>> {
    let added_thread = state
        .service_context()
        .add_thread()
        .execute(&payload, &auth.id)
        .await?;
    Ok(Created(Success(json!({ "addedThread": added_thread }))))
}

/// Thread detail with comments, replies, and like counts
///
/// GET /threads/:thread_id
pub async fn get_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> ApiResult<Success<Value>> {
    let thread = state
        .service_context()
        .get_thread_by_id()
        .execute(&thread_id)
        .await?;
    Ok(Success(json!({ "thread": thread })))
}
