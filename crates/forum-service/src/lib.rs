//! # forum-service
//!
//! Application layer: one use case per operation, wired through
//! [`ServiceContext`].

pub mod context;
pub mod use_cases;

pub use context::{MissingDependency, ServiceContext, ServiceContextBuilder};
pub use use_cases::*;
