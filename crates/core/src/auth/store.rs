//! Persistence contracts the authentication core depends on.
//!
//! Implementations live outside the core (see `chirpy-db`). Records are never
//! updated after creation except by [`RefreshTokenStore::revoke`], which must
//! be atomic per record and must never clear an existing `revoked_at`.

use async_trait::async_trait;

use super::refresh::{NewRefreshToken, RefreshToken};
use super::StoreError;
use crate::types::UserId;

/// What the core needs to know about an account to check a password.
#[derive(Debug, Clone)]
pub struct Credential {
    pub user_id: UserId,
    pub email: String,
    pub password_hash: String,
}

/// Credential lookup for login.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find the credential registered under `email`, if any.
    async fn find_by_email(&self, email: &str) -> Result<Option<Credential>, StoreError>;
}

/// Create/lookup/revoke over refresh-token records.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Persist a new record.
    async fn create(&self, input: &NewRefreshToken) -> Result<RefreshToken, StoreError>;

    /// Exact-match lookup. Returns revoked and expired records too; the
    /// caller decides what they mean.
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, StoreError>;

    /// Mark the record revoked. Returns `false` when no record has this token.
    async fn revoke(&self, token: &str) -> Result<bool, StoreError>;
}
