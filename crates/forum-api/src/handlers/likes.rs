//! Like handler

use axum::extract::{Path, State};

use crate::extractors::AuthUser;
use crate::response::{ApiResult, Done};
use crate::state::AppState;

/// Toggle the caller's like on a comment
///
/// PUT /threads/:thread_id/comments/:comment_id/likes
pub async fn put_like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> ApiResult<Done> {
    state
        .service_context()
        .like_comment()
        .execute(&thread_id, &comment_id, &auth.id)
        .await?;
    Ok(Done)
}
