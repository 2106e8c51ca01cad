//! Postgres-backed implementations of the authentication store contracts.

use async_trait::async_trait;
use chirpy_core::auth::refresh::{NewRefreshToken, RefreshToken};
use chirpy_core::auth::store::{Credential, CredentialStore, RefreshTokenStore};
use chirpy_core::auth::StoreError;

use crate::repositories::{RefreshTokenRepo, UserRepo};
use crate::DbPool;

fn store_error(err: sqlx::Error) -> StoreError {
    tracing::error!(error = %err, "Auth store query failed");
    StoreError::new(err)
}

/// Credential lookup over the `users` table.
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: DbPool,
}

impl PgCredentialStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Credential>, StoreError> {
        let user = UserRepo::find_by_email(&self.pool, email)
            .await
            .map_err(store_error)?;
        Ok(user.map(|u| Credential {
            user_id: u.id,
            email: u.email,
            password_hash: u.password_hash,
        }))
    }
}

/// Refresh-token records in the `refresh_tokens` table.
#[derive(Clone)]
pub struct PgRefreshTokenStore {
    pool: DbPool,
}

impl PgRefreshTokenStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenStore for PgRefreshTokenStore {
    async fn create(&self, input: &NewRefreshToken) -> Result<RefreshToken, StoreError> {
        RefreshTokenRepo::create(&self.pool, input)
            .await
            .map(RefreshToken::from)
            .map_err(store_error)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, StoreError> {
        RefreshTokenRepo::find_by_token(&self.pool, token)
            .await
            .map(|row| row.map(RefreshToken::from))
            .map_err(store_error)
    }

    async fn revoke(&self, token: &str) -> Result<bool, StoreError> {
        RefreshTokenRepo::revoke(&self.pool, token)
            .await
            .map_err(store_error)
    }
}
