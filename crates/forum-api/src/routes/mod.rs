//! Route definitions
//!
//! Resource routes are mounted at the root; health probes are exported
//! separately so they stay outside the request middleware.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use forum_common::AppError;

use crate::handlers::{authentications, comments, health, likes, replies, threads, users};
use crate::response::ApiError;
use crate::state::AppState;

/// Create the main API router (excluding health probes)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(authentication_routes())
        .merge(thread_routes())
        .fallback(not_found)
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(users::post_user))
}

fn authentication_routes() -> Router<AppState> {
    Router::new().route(
        "/authentications",
        post(authentications::post_authentication)
            .put(authentications::put_authentication)
            .delete(authentications::delete_authentication),
    )
}

fn thread_routes() -> Router<AppState> {
    Router::new()
        .route("/threads", post(threads::post_thread))
        .route("/threads/:thread_id", get(threads::get_thread))
        // Comments
        .route("/threads/:thread_id/comments", post(comments::post_comment))
        .route(
            "/threads/:thread_id/comments/:comment_id",
            delete(comments::delete_comment),
        )
        // Replies
        .route(
            "/threads/:thread_id/comments/:comment_id/replies",
            post(replies::post_reply),
        )
        .route(
            "/threads/:thread_id/comments/:comment_id/replies/:reply_id",
            delete(replies::delete_reply),
        )
        // Likes
        .route(
            "/threads/:thread_id/comments/:comment_id/likes",
            put(likes::put_like),
        )
}

async fn not_found() -> ApiError {
    AppError::NotFound("route".to_string()).into()
}
