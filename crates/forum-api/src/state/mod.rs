//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the access token verifier, and the database pool for readiness probes.

use std::sync::Arc;

use forum_common::{AppConfig, JwtTokenManager};
use forum_db::PgPool;
use forum_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    token_manager: Arc<JwtTokenManager>,
    pool: PgPool,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(
        service_context: ServiceContext,
        token_manager: Arc<JwtTokenManager>,
        pool: PgPool,
        config: AppConfig,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            token_manager,
            pool,
            config: Arc::new(config),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Verifier for bearer access tokens
    pub fn token_manager(&self) -> &JwtTokenManager {
        &self.token_manager
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
