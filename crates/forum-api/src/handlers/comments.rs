//! Comment handlers

use axum::extract::{Path, State};
use serde_json::{json, Value};

use crate::extractors::{AuthUser, JsonPayload};
use crate::response::{ApiResult, Created, Done, Success};
use crate::state::AppState;

/// Comment on a thread
///
/// POST /threads/:thread_id/comments
pub async fn post_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(thread_id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> ApiResult<Created<Success<Value>>> {
    let added_comment = state
        .service_context()
        .add_comment()
        .execute(&thread_id, &payload, &auth.id)
        .await?;
    Ok(Created(Success(json!({ "addedComment": added_comment }))))
}

/// Soft-delete own comment
///
/// DELETE /threads/:thread_id/comments/:comment_id
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> ApiResult<Done> {
    state
        .service_context()
        .delete_comment()
        .execute(&thread_id, &comment_id, &auth.id)
        .await?;
    Ok(Done)
}
