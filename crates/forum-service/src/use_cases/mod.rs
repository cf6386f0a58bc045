//! Use cases - one struct per application operation
//!
//! Each use case owns the collaborators it needs and exposes a single
//! `execute`. Domain errors are propagated unchanged.

mod add_comment;
mod add_reply;
mod add_thread;
mod add_user;
mod delete_comment;
mod delete_reply;
mod get_thread_by_id;
mod like_comment;
mod login_user;
mod logout_user;
mod refresh_authentication;

pub use add_comment::AddCommentUseCase;
pub use add_reply::AddReplyUseCase;
pub use add_thread::AddThreadUseCase;
pub use add_user::AddUserUseCase;
pub use delete_comment::DeleteCommentUseCase;
pub use delete_reply::DeleteReplyUseCase;
pub use get_thread_by_id::GetThreadByIdUseCase;
pub use like_comment::LikeCommentUseCase;
pub use login_user::LoginUserUseCase;
pub use logout_user::LogoutUserUseCase;
pub use refresh_authentication::RefreshAuthenticationUseCase;
