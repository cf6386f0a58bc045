//! Reply handlers

use axum::extract::{Path, State};
use serde_json::{json, Value};

use crate::extractors::{AuthUser, JsonPayload};
use crate::response::{ApiResult, Created, Done, Success};
use crate::state::AppState;

/// Reply to a comment
///
/// POST /threads/:thread_id/comments/:comment_id/replies
pub async fn post_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
    JsonPayload(payload): JsonPayload,
) -> ApiResult<Created<Success<Value>>> {
    let added_reply = state
        .service_context()
        .add_reply()
        .execute(&thread_id, &comment_id, &payload, &auth.id)
        .await?;
    Ok(Created(Success(json!({ "addedReply": added_reply }))))
}

/// Soft-delete own reply
///
/// DELETE /threads/:thread_id/comments/:comment_id/replies/:reply_id
pub async fn delete_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
) -> ApiResult<Done> {
    state
        .service_context()
        .delete_reply()
        .execute(&thread_id, &comment_id, &reply_id, &auth.id)
        .await?;
    Ok(Done)
}
