//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod authentications;
pub mod comments;
pub mod health;
pub mod likes;
pub mod replies;
pub mod threads;
pub mod users;
