//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for the forum API.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::helpers::{assert_json, TestServer};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Username unique across test runs against the same database
pub fn unique_username() -> String {
    format!(
        "user_{}_{}",
        chrono::Utc::now().timestamp_micros(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    )
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        Self {
            username: unique_username(),
            password: "secret".to_string(),
            fullname: "Dicoding Indonesia".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// `{"status":"success","data":…}` envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub data: T,
}

/// `{"status":"fail"|"error","message":…}` body
#[derive(Debug, Deserialize)]
pub struct FailBody {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedUserData {
    pub added_user: AddedResource,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenData {
    pub access_token: String,
}

/// Any created resource; only the fields every resource carries
#[derive(Debug, Deserialize)]
pub struct AddedResource {
    pub id: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThreadData {
    pub added_thread: AddedResource,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCommentData {
    pub added_comment: AddedResource,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedReplyData {
    pub added_reply: AddedResource,
}

#[derive(Debug, Deserialize)]
pub struct ThreadData {
    pub thread: ThreadBody,
}

#[derive(Debug, Deserialize)]
pub struct ThreadBody {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
    pub comments: Vec<CommentBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentBody {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
    pub replies: Vec<ReplyBody>,
    pub like_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct ReplyBody {
    pub id: String,
    pub content: String,
    pub date: String,
    pub username: String,
}

/// A registered, logged-in user
pub struct TestUser {
    pub id: String,
    pub username: String,
    pub access_token: String,
    pub refresh_token: String,
}

/// Register a fresh user and log in
pub async fn register_and_login(server: &TestServer) -> Result<TestUser> {
    let register = RegisterRequest::unique();

    let response = server.post("/users", &register).await?;
    let registered: Envelope<AddedUserData> = assert_json(response, StatusCode::CREATED).await?;

    let response = server
        .post("/authentications", &LoginRequest::from_register(&register))
        .await?;
    let tokens: Envelope<TokenPair> = assert_json(response, StatusCode::CREATED).await?;

    Ok(TestUser {
        id: registered.data.added_user.id,
        username: register.username,
        access_token: tokens.data.access_token,
        refresh_token: tokens.data.refresh_token,
    })
}

/// Create a thread owned by `user` and return its id
pub async fn create_thread(server: &TestServer, user: &TestUser) -> Result<String> {
    let response = server
        .post_auth(
            "/threads",
            &user.access_token,
            &json!({ "title": "sebuah thread", "body": "sebuah body thread" }),
        )
        .await?;
    let added: Envelope<AddedThreadData> = assert_json(response, StatusCode::CREATED).await?;
    Ok(added.data.added_thread.id)
}

/// Comment on a thread as `user` and return the comment id
pub async fn create_comment(server: &TestServer, user: &TestUser, thread_id: &str) -> Result<String> {
    let response = server
        .post_auth(
            &format!("/threads/{thread_id}/comments"),
            &user.access_token,
            &json!({ "content": "sebuah comment" }),
        )
        .await?;
    let added: Envelope<AddedCommentData> = assert_json(response, StatusCode::CREATED).await?;
    Ok(added.data.added_comment.id)
}
