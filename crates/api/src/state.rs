use std::sync::Arc;

use chirpy_core::auth::SessionManager;
use chirpy_db::stores::{PgCredentialStore, PgRefreshTokenStore};
use chirpy_db::DbPool;

use crate::config::ServerConfig;

/// The session manager wired to the Postgres stores.
pub type Sessions = SessionManager<PgCredentialStore, PgRefreshTokenStore>;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
    /// Server configuration, immutable after startup.
    pub config: Arc<ServerConfig>,
    /// Login / refresh / revoke / identity resolution.
    pub sessions: Arc<Sessions>,
}

impl AppState {
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        let sessions = SessionManager::new(
            PgCredentialStore::new(pool.clone()),
            PgRefreshTokenStore::new(pool.clone()),
            config.auth.clone(),
        );
        Self {
            pool,
            config: Arc::new(config),
            sessions: Arc::new(sessions),
        }
    }
}
