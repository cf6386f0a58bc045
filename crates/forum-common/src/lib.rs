//! # forum-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Argon2PasswordHash, Claims, JwtTokenManager};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, ServerConfig,
    TokenConfig,
};
pub use error::{
    AppError, AppResult, DomainErrorTranslator, ErrorResponse, SERVER_FAILURE_MESSAGE,
};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
