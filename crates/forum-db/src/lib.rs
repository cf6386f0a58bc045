//! # forum-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the storage traits
//! defined in `forum-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → record mappers and id generation
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forum_db::{create_pool, run_migrations, PgThreadRepository, PoolConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::new("postgres://localhost/forum")).await?;
//!     run_migrations(&pool).await?;
//!     let thread_repo = PgThreadRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PoolConfig};
pub use repositories::{
    PgAuthenticationRepository, PgCommentRepository, PgLikeRepository, PgReplyRepository,
    PgThreadRepository, PgUserRepository,
};
pub use sqlx::PgPool;
