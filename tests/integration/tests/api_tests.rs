//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance reachable through
//! `DATABASE_URL`; they skip when it is not set.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, create_comment, create_thread, fixtures::*,
    register_and_login, TestServer,
};
use reqwest::{Method, StatusCode};
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/users", &request).await.unwrap();
    let body: Envelope<AddedUserData> = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body.status, "success");
    assert!(body.data.added_user.id.starts_with("user-"));
    assert_eq!(body.data.added_user.username.as_deref(), Some(request.username.as_str()));
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/users", &request).await.unwrap();

    let response = server.post("/users", &request).await.unwrap();
    let body: FailBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.status, "fail");
    assert_eq!(body.message, "Username is not available.");
}

#[tokio::test]
async fn test_register_with_missing_property() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/users", &json!({ "username": unique_username(), "password": "secret" }))
        .await
        .unwrap();
    let body: FailBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(
        body.message,
        "Cannot create new user because required property is missing."
    );
}

#[tokio::test]
async fn test_register_with_restricted_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/users",
            &json!({ "username": "dico ding", "password": "secret", "fullname": "Dicoding" }),
        )
        .await
        .unwrap();
    let body: FailBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(
        body.message,
        "Cannot create new user because username contains restricted characters."
    );
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_login_refresh_logout() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_and_login(&server).await.unwrap();
    assert!(!user.access_token.is_empty());

    let refresh = json!({ "refreshToken": user.refresh_token });

    let response = server
        .send(Method::PUT, "/authentications", &refresh)
        .await
        .unwrap();
    let body: Envelope<AccessTokenData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!body.data.access_token.is_empty());

    let response = server
        .send(Method::DELETE, "/authentications", &refresh)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .send(Method::PUT, "/authentications", &refresh)
        .await
        .unwrap();
    let body: FailBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.message, "Refresh token not found in database.");
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    server.post("/users", &register).await.unwrap();

    let response = server
        .post(
            "/authentications",
            &json!({ "username": register.username, "password": "wrong" }),
        )
        .await
        .unwrap();
    let body: FailBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.message, "The credentials you entered are incorrect.");
}

#[tokio::test]
async fn test_refresh_with_forged_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .send(Method::PUT, "/authentications", &json!({ "refreshToken": "forged" }))
        .await
        .unwrap();
    let body: FailBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.message, "Refresh token is invalid.");

    let response = server
        .send(Method::PUT, "/authentications", &json!({}))
        .await
        .unwrap();
    let body: FailBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.message, "Must send refresh token.");
}

// ============================================================================
// Thread Tests
// ============================================================================

#[tokio::test]
async fn test_create_thread_requires_authentication() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/threads", &json!({ "title": "a", "body": "b" }))
        .await
        .unwrap();
    let body: FailBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.message, "Missing authentication");
}

#[tokio::test]
async fn test_create_thread() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_and_login(&server).await.unwrap();

    let response = server
        .post_auth(
            "/threads",
            &user.access_token,
            &json!({ "title": "sebuah thread", "body": "sebuah body thread" }),
        )
        .await
        .unwrap();
    let body: Envelope<AddedThreadData> = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(body.data.added_thread.id.starts_with("thread-"));
    assert_eq!(body.data.added_thread.owner.as_deref(), Some(user.id.as_str()));
}

#[tokio::test]
async fn test_create_thread_with_wrong_type() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_and_login(&server).await.unwrap();

    let response = server
        .post_auth(
            "/threads",
            &user.access_token,
            &json!({ "title": 123, "body": "sebuah body thread" }),
        )
        .await
        .unwrap();
    let body: FailBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(
        body.message,
        "Cannot create new thread because data type does not match."
    );
}

#[tokio::test]
async fn test_get_missing_thread() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/threads/thread-does-not-exist").await.unwrap();
    let body: FailBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.status, "fail");
    assert_eq!(body.message, "Thread not found.");
}

// ============================================================================
// Comment, Reply & Like Tests
// ============================================================================

#[tokio::test]
async fn test_thread_detail_after_interactions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_and_login(&server).await.unwrap();
    let reader = register_and_login(&server).await.unwrap();

    let thread_id = create_thread(&server, &author).await.unwrap();
    let first = create_comment(&server, &reader, &thread_id).await.unwrap();
    let second = create_comment(&server, &author, &thread_id).await.unwrap();

    let response = server
        .post_auth(
            &format!("/threads/{thread_id}/comments/{first}/replies"),
            &author.access_token,
            &json!({ "content": "sebuah balasan" }),
        )
        .await
        .unwrap();
    let reply: Envelope<AddedReplyData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let reply_id = reply.data.added_reply.id;

    let response = server
        .delete_auth(
            &format!("/threads/{thread_id}/comments/{first}/replies/{reply_id}"),
            &author.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/threads/{thread_id}/comments/{second}"),
            &author.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .put_auth(
            &format!("/threads/{thread_id}/comments/{first}/likes"),
            &reader.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/threads/{thread_id}")).await.unwrap();
    let body: Envelope<ThreadData> = assert_json(response, StatusCode::OK).await.unwrap();
    let thread = body.data.thread;

    assert_eq!(thread.id, thread_id);
    assert_eq!(thread.username, author.username);
    assert_eq!(thread.comments.len(), 2);

    assert_eq!(thread.comments[0].id, first);
    assert_eq!(thread.comments[0].username, reader.username);
    assert_eq!(thread.comments[0].content, "sebuah comment");
    assert_eq!(thread.comments[0].like_count, 1);
    assert_eq!(thread.comments[0].replies.len(), 1);
    assert_eq!(thread.comments[0].replies[0].content, "**balasan telah dihapus**");

    assert_eq!(thread.comments[1].id, second);
    assert_eq!(thread.comments[1].content, "**komentar telah dihapus**");
    assert_eq!(thread.comments[1].like_count, 0);
}

#[tokio::test]
async fn test_like_twice_toggles_off() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_and_login(&server).await.unwrap();
    let thread_id = create_thread(&server, &user).await.unwrap();
    let comment_id = create_comment(&server, &user, &thread_id).await.unwrap();
    let path = format!("/threads/{thread_id}/comments/{comment_id}/likes");

    for _ in 0..2 {
        let response = server.put_auth(&path, &user.access_token).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get(&format!("/threads/{thread_id}")).await.unwrap();
    let body: Envelope<ThreadData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.thread.comments[0].like_count, 0);
}

#[tokio::test]
async fn test_delete_comment_of_another_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_and_login(&server).await.unwrap();
    let other = register_and_login(&server).await.unwrap();
    let thread_id = create_thread(&server, &author).await.unwrap();
    let comment_id = create_comment(&server, &author, &thread_id).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/threads/{thread_id}/comments/{comment_id}"),
            &other.access_token,
        )
        .await
        .unwrap();
    let body: FailBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.message, "You are not allowed to delete this comment.");
}

#[tokio::test]
async fn test_comment_on_missing_thread() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_and_login(&server).await.unwrap();

    let response = server
        .post_auth(
            "/threads/thread-does-not-exist/comments",
            &user.access_token,
            &json!({ "content": "sebuah comment" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_reply_to_missing_comment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_and_login(&server).await.unwrap();
    let thread_id = create_thread(&server, &user).await.unwrap();

    let response = server
        .post_auth(
            &format!("/threads/{thread_id}/comments/comment-does-not-exist/replies"),
            &user.access_token,
            &json!({ "content": "sebuah balasan" }),
        )
        .await
        .unwrap();
    let body: FailBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.message, "Comment not found.");
}

#[tokio::test]
async fn test_unknown_route() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/nothing-here").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
