//! Axum extractors for request handling
//!
//! Custom extractors for authentication and raw JSON payloads.

mod auth;
mod payload;

pub use auth::AuthUser;
pub use payload::JsonPayload;
