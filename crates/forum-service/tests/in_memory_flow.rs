//! End-to-end use case flows over in-memory collaborators

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use forum_core::entities::{
    AddedComment, AddedReply, AddedThread, CommentLikeCount, CommentRecord, NewComment, NewReply,
    NewThread, RegisterUser, RegisteredUser, ReplyRecord, ThreadRecord, TokenPayload,
};
use forum_core::traits::{
    AuthenticationRepository, AuthenticationTokenManager, CommentRepository, LikeRepository,
    PasswordHash, ReplyRepository, RepoResult, ThreadRepository, UserRepository,
};
use forum_core::{DomainError, DomainResult, DELETED_COMMENT_CONTENT, DELETED_REPLY_CONTENT};
use forum_service::ServiceContext;
use parking_lot::Mutex;
use serde_json::json;

const DATE: &str = "2021-08-08T07:19:09.775Z";

struct StoredUser {
    id: String,
    username: String,
    password: String,
}

struct StoredThread {
    id: String,
    title: String,
    body: String,
    owner: String,
}

struct StoredComment {
    id: String,
    thread_id: String,
    owner: String,
    content: String,
    is_delete: bool,
}

struct StoredReply {
    id: String,
    thread_id: String,
    comment_id: String,
    owner: String,
    content: String,
    is_delete: bool,
}

struct StoredLike {
    thread_id: String,
    comment_id: String,
    owner: String,
}

#[derive(Default)]
struct Tables {
    users: Vec<StoredUser>,
    tokens: Vec<String>,
    threads: Vec<StoredThread>,
    comments: Vec<StoredComment>,
    replies: Vec<StoredReply>,
    likes: Vec<StoredLike>,
}

/// One store implementing every repository, like a single database
#[derive(Default)]
struct InMemoryStore {
    tables: Mutex<Tables>,
    sequence: AtomicUsize,
}

impl InMemoryStore {
    fn next_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

fn username_of(tables: &Tables, user_id: &str) -> String {
    tables
        .users
        .iter()
        .find(|u| u.id == user_id)
        .map(|u| u.username.clone())
        .unwrap_or_default()
}

#[async_trait]
impl ThreadRepository for InMemoryStore {
    async fn add_thread(&self, new_thread: &NewThread, owner: &str) -> RepoResult<AddedThread> {
        let id = self.next_id("thread");
        self.tables.lock().threads.push(StoredThread {
            id: id.clone(),
            title: new_thread.title().to_string(),
            body: new_thread.body().to_string(),
            owner: owner.to_string(),
        });
        AddedThread::new(&json!({ "id": id, "title": new_thread.title(), "owner": owner }))
    }

    async fn verify_thread_exist(&self, thread_id: &str) -> RepoResult<()> {
        let tables = self.tables.lock();
        if tables.threads.iter().any(|t| t.id == thread_id) {
            Ok(())
        } else {
            Err(DomainError::ThreadNotFound)
        }
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> RepoResult<ThreadRecord> {
        let tables = self.tables.lock();
        let thread = tables
            .threads
            .iter()
            .find(|t| t.id == thread_id)
            .ok_or(DomainError::ThreadNotFound)?;
        Ok(ThreadRecord {
            id: thread.id.clone(),
            title: thread.title.clone(),
            body: thread.body.clone(),
            date: DATE.to_string(),
            username: username_of(&tables, &thread.owner),
        })
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn add_comment(
        &self,
        thread_id: &str,
        new_comment: &NewComment,
        owner: &str,
    ) -> RepoResult<AddedComment> {
        let id = self.next_id("comment");
        self.tables.lock().comments.push(StoredComment {
            id: id.clone(),
            thread_id: thread_id.to_string(),
            owner: owner.to_string(),
            content: new_comment.content().to_string(),
            is_delete: false,
        });
        AddedComment::new(&json!({ "id": id, "content": new_comment.content(), "owner": owner }))
    }

    async fn verify_comment_exist(&self, thread_id: &str, comment_id: &str) -> RepoResult<()> {
        let tables = self.tables.lock();
        if tables
            .comments
            .iter()
            .any(|c| c.id == comment_id && c.thread_id == thread_id)
        {
            Ok(())
        } else {
            Err(DomainError::CommentNotFound)
        }
    }

    async fn verify_comment_owner(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> RepoResult<()> {
        let tables = self.tables.lock();
        let comment = tables
            .comments
            .iter()
            .find(|c| c.id == comment_id && c.thread_id == thread_id)
            .ok_or(DomainError::CommentNotFound)?;
        if comment.owner == owner {
            Ok(())
        } else {
            Err(DomainError::NotCommentOwner)
        }
    }

    async fn delete_comment(&self, thread_id: &str, comment_id: &str) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let comment = tables
            .comments
            .iter_mut()
            .find(|c| c.id == comment_id && c.thread_id == thread_id)
            .ok_or(DomainError::CommentNotFound)?;
        comment.is_delete = true;
        Ok(())
    }

    async fn get_comments_by_thread_id(&self, thread_id: &str) -> RepoResult<Vec<CommentRecord>> {
        let tables = self.tables.lock();
        Ok(tables
            .comments
            .iter()
            .filter(|c| c.thread_id == thread_id)
            .map(|c| CommentRecord {
                id: c.id.clone(),
                username: username_of(&tables, &c.owner),
                date: DATE.to_string(),
                content: c.content.clone(),
                is_delete: c.is_delete,
            })
            .collect())
    }
}

#[async_trait]
impl ReplyRepository for InMemoryStore {
    async fn add_reply(
        &self,
        thread_id: &str,
        comment_id: &str,
        new_reply: &NewReply,
        owner: &str,
    ) -> RepoResult<AddedReply> {
        let id = self.next_id("reply");
        self.tables.lock().replies.push(StoredReply {
            id: id.clone(),
            thread_id: thread_id.to_string(),
            comment_id: comment_id.to_string(),
            owner: owner.to_string(),
            content: new_reply.content().to_string(),
            is_delete: false,
        });
        AddedReply::new(&json!({ "id": id, "content": new_reply.content(), "owner": owner }))
    }

    async fn verify_reply_exist(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> RepoResult<()> {
        let tables = self.tables.lock();
        if tables
            .replies
            .iter()
            .any(|r| r.id == reply_id && r.comment_id == comment_id && r.thread_id == thread_id)
        {
            Ok(())
        } else {
            Err(DomainError::ReplyNotFound)
        }
    }

    async fn verify_reply_owner(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
        owner: &str,
    ) -> RepoResult<()> {
        let tables = self.tables.lock();
        let reply = tables
            .replies
            .iter()
            .find(|r| r.id == reply_id && r.comment_id == comment_id && r.thread_id == thread_id)
            .ok_or(DomainError::ReplyNotFound)?;
        if reply.owner == owner {
            Ok(())
        } else {
            Err(DomainError::NotReplyOwner)
        }
    }

    async fn delete_reply(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let reply = tables
            .replies
            .iter_mut()
            .find(|r| r.id == reply_id && r.comment_id == comment_id && r.thread_id == thread_id)
            .ok_or(DomainError::ReplyNotFound)?;
        reply.is_delete = true;
        Ok(())
    }

    async fn get_replies_by_thread_id(&self, thread_id: &str) -> RepoResult<Vec<ReplyRecord>> {
        let tables = self.tables.lock();
        Ok(tables
            .replies
            .iter()
            .filter(|r| r.thread_id == thread_id)
            .map(|r| ReplyRecord {
                id: r.id.clone(),
                comment_id: r.comment_id.clone(),
                content: r.content.clone(),
                date: DATE.to_string(),
                username: username_of(&tables, &r.owner),
                is_delete: r.is_delete,
            })
            .collect())
    }
}

#[async_trait]
impl LikeRepository for InMemoryStore {
    async fn verify_like_exist(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> RepoResult<bool> {
        Ok(self.tables.lock().likes.iter().any(|l| {
            l.thread_id == thread_id && l.comment_id == comment_id && l.owner == owner
        }))
    }

    async fn add_like(&self, thread_id: &str, comment_id: &str, owner: &str) -> RepoResult<()> {
        self.tables.lock().likes.push(StoredLike {
            thread_id: thread_id.to_string(),
            comment_id: comment_id.to_string(),
            owner: owner.to_string(),
        });
        Ok(())
    }

    async fn delete_like(&self, thread_id: &str, comment_id: &str, owner: &str) -> RepoResult<()> {
        self.tables.lock().likes.retain(|l| {
            !(l.thread_id == thread_id && l.comment_id == comment_id && l.owner == owner)
        });
        Ok(())
    }

    async fn get_likes_by_thread_id(&self, thread_id: &str) -> RepoResult<Vec<CommentLikeCount>> {
        let tables = self.tables.lock();
        let mut counts: Vec<CommentLikeCount> = Vec::new();
        for like in tables.likes.iter().filter(|l| l.thread_id == thread_id) {
            match counts.iter_mut().find(|c| c.comment_id == like.comment_id) {
                Some(count) => count.like_count += 1,
                None => counts.push(CommentLikeCount::new(like.comment_id.clone(), 1)),
            }
        }
        Ok(counts)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn verify_available_username(&self, username: &str) -> RepoResult<()> {
        if self.tables.lock().users.iter().any(|u| u.username == username) {
            Err(DomainError::UsernameTaken)
        } else {
            Ok(())
        }
    }

    async fn add_user(&self, register_user: &RegisterUser) -> RepoResult<RegisteredUser> {
        let id = self.next_id("user");
        self.tables.lock().users.push(StoredUser {
            id: id.clone(),
            username: register_user.username().to_string(),
            password: register_user.password().to_string(),
        });
        RegisteredUser::new(&json!({
            "id": id,
            "username": register_user.username(),
            "fullname": register_user.fullname(),
        }))
    }

    async fn get_password_by_username(&self, username: &str) -> RepoResult<String> {
        self.tables
            .lock()
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.password.clone())
            .ok_or(DomainError::UsernameNotFound)
    }

    async fn get_id_by_username(&self, username: &str) -> RepoResult<String> {
        self.tables
            .lock()
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.id.clone())
            .ok_or(DomainError::UsernameNotFound)
    }
}

#[async_trait]
impl AuthenticationRepository for InMemoryStore {
    async fn add_token(&self, token: &str) -> RepoResult<()> {
        self.tables.lock().tokens.push(token.to_string());
        Ok(())
    }

    async fn check_availability_token(&self, token: &str) -> RepoResult<()> {
        if self.tables.lock().tokens.iter().any(|t| t == token) {
            Ok(())
        } else {
            Err(DomainError::RefreshTokenNotFound)
        }
    }

    async fn delete_token(&self, token: &str) -> RepoResult<()> {
        self.tables.lock().tokens.retain(|t| t != token);
        Ok(())
    }
}

/// Reversible "hash" so stored passwords are visibly transformed
struct ReversedHash;

#[async_trait]
impl PasswordHash for ReversedHash {
    async fn hash(&self, password: &str) -> DomainResult<String> {
        Ok(password.chars().rev().collect())
    }

    async fn compare_password(&self, password: &str, hashed: &str) -> DomainResult<()> {
        if password.chars().rev().collect::<String>() == hashed {
            Ok(())
        } else {
            Err(DomainError::InvalidCredentials)
        }
    }
}

/// Plain-text tokens of the form `kind:username:id`
struct PlainTokens;

impl AuthenticationTokenManager for PlainTokens {
    fn create_access_token(&self, payload: &TokenPayload) -> DomainResult<String> {
        Ok(format!("access:{}:{}", payload.username, payload.id))
    }

    fn create_refresh_token(&self, payload: &TokenPayload) -> DomainResult<String> {
        Ok(format!("refresh:{}:{}", payload.username, payload.id))
    }

    fn verify_refresh_token(&self, token: &str) -> DomainResult<()> {
        if token.starts_with("refresh:") {
            Ok(())
        } else {
            Err(DomainError::InvalidRefreshToken)
        }
    }

    fn decode_payload(&self, token: &str) -> DomainResult<TokenPayload> {
        let mut parts = token.splitn(3, ':').skip(1);
        match (parts.next(), parts.next()) {
            (Some(username), Some(id)) => Ok(TokenPayload::new(username, id)),
            _ => Err(DomainError::InvalidRefreshToken),
        }
    }
}

fn context() -> (ServiceContext, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::default());
    let context = ServiceContext::builder()
        .thread_repo(store.clone())
        .comment_repo(store.clone())
        .reply_repo(store.clone())
        .like_repo(store.clone())
        .user_repo(store.clone())
        .authentication_repo(store.clone())
        .password_hash(Arc::new(ReversedHash))
        .token_manager(Arc::new(PlainTokens))
        .build()
        .expect("all dependencies provided");
    (context, store)
}

async fn register(context: &ServiceContext, username: &str) -> String {
    context
        .add_user()
        .execute(&json!({
            "username": username,
            "password": "secret",
            "fullname": "Test User",
        }))
        .await
        .unwrap()
        .id()
        .to_string()
}

#[tokio::test]
async fn test_authentication_lifecycle() {
    let (context, store) = context();
    let user_id = register(&context, "dicoding").await;

    assert_eq!(store.tables.lock().users[0].password, "terces");

    let duplicate = context
        .add_user()
        .execute(&json!({ "username": "dicoding", "password": "x", "fullname": "y" }))
        .await
        .unwrap_err();
    assert!(matches!(duplicate, DomainError::UsernameTaken));

    let wrong = context
        .login_user()
        .execute(&json!({ "username": "dicoding", "password": "wrong" }))
        .await
        .unwrap_err();
    assert!(matches!(wrong, DomainError::InvalidCredentials));

    let auth = context
        .login_user()
        .execute(&json!({ "username": "dicoding", "password": "secret" }))
        .await
        .unwrap();
    assert_eq!(auth.access_token(), format!("access:dicoding:{user_id}"));

    let refreshed = context
        .refresh_authentication()
        .execute(&json!({ "refreshToken": auth.refresh_token() }))
        .await
        .unwrap();
    assert_eq!(refreshed, auth.access_token());

    context
        .logout_user()
        .execute(&json!({ "refreshToken": auth.refresh_token() }))
        .await
        .unwrap();

    let after_logout = context
        .refresh_authentication()
        .execute(&json!({ "refreshToken": auth.refresh_token() }))
        .await
        .unwrap_err();
    assert!(matches!(after_logout, DomainError::RefreshTokenNotFound));
}

#[tokio::test]
async fn test_thread_detail_reflects_every_interaction() {
    let (context, _store) = context();
    let author = register(&context, "dicoding").await;
    let reader = register(&context, "johndoe").await;

    let thread = context
        .add_thread()
        .execute(&json!({ "title": "sebuah thread", "body": "sebuah body" }), &author)
        .await
        .unwrap();
    let first = context
        .add_comment()
        .execute(thread.id(), &json!({ "content": "komentar pertama" }), &reader)
        .await
        .unwrap();
    let second = context
        .add_comment()
        .execute(thread.id(), &json!({ "content": "komentar kedua" }), &author)
        .await
        .unwrap();
    let reply = context
        .add_reply()
        .execute(thread.id(), first.id(), &json!({ "content": "balasan" }), &author)
        .await
        .unwrap();

    context
        .delete_reply()
        .execute(thread.id(), first.id(), reply.id(), &author)
        .await
        .unwrap();
    context
        .delete_comment()
        .execute(thread.id(), second.id(), &author)
        .await
        .unwrap();
    context
        .like_comment()
        .execute(thread.id(), first.id(), &reader)
        .await
        .unwrap();
    context
        .like_comment()
        .execute(thread.id(), first.id(), &author)
        .await
        .unwrap();

    let detail = context
        .get_thread_by_id()
        .execute(thread.id())
        .await
        .unwrap();

    assert_eq!(detail.username(), "dicoding");
    assert_eq!(detail.comments().len(), 2);

    let first_view = &detail.comments()[0];
    assert_eq!(first_view.username(), "johndoe");
    assert_eq!(first_view.content(), "komentar pertama");
    assert_eq!(first_view.like_count(), 2);
    assert_eq!(first_view.replies().len(), 1);
    assert_eq!(first_view.replies()[0].content(), DELETED_REPLY_CONTENT);

    let second_view = &detail.comments()[1];
    assert_eq!(second_view.content(), DELETED_COMMENT_CONTENT);
    assert_eq!(second_view.like_count(), 0);
}

#[tokio::test]
async fn test_second_like_toggles_off() {
    let (context, _store) = context();
    let user = register(&context, "dicoding").await;

    let thread = context
        .add_thread()
        .execute(&json!({ "title": "t", "body": "b" }), &user)
        .await
        .unwrap();
    let comment = context
        .add_comment()
        .execute(thread.id(), &json!({ "content": "c" }), &user)
        .await
        .unwrap();

    for _ in 0..2 {
        context
            .like_comment()
            .execute(thread.id(), comment.id(), &user)
            .await
            .unwrap();
    }

    let detail = context
        .get_thread_by_id()
        .execute(thread.id())
        .await
        .unwrap();
    assert_eq!(detail.comments()[0].like_count(), 0);
}

#[tokio::test]
async fn test_only_author_deletes_comment() {
    let (context, _store) = context();
    let author = register(&context, "dicoding").await;
    let other = register(&context, "johndoe").await;

    let thread = context
        .add_thread()
        .execute(&json!({ "title": "t", "body": "b" }), &author)
        .await
        .unwrap();
    let comment = context
        .add_comment()
        .execute(thread.id(), &json!({ "content": "c" }), &author)
        .await
        .unwrap();

    let err = context
        .delete_comment()
        .execute(thread.id(), comment.id(), &other)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotCommentOwner));

    let err = context
        .delete_comment()
        .execute("thread-xxx", comment.id(), &author)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::ThreadNotFound));
}
