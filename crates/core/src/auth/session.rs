//! Session orchestration over the credential and refresh-token stores.
//!
//! Refresh-token records move from ACTIVE to either EXPIRED (clock passed
//! `expires_at`) or REVOKED (explicit revoke). Both are terminal. Callers see
//! the same "unauthorized" for each; logs keep them apart.

use chrono::Utc;

use super::jwt::{issue_access_token, validate_access_token};
use super::password::{verify_dummy, verify_password};
use super::refresh::{generate_refresh_token, NewRefreshToken, RefreshToken};
use super::store::{CredentialStore, RefreshTokenStore};
use super::{AuthConfig, AuthError};
use crate::types::UserId;

/// Tokens handed out by a successful login.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub user_id: UserId,
    pub access_token: String,
    pub refresh_token: RefreshToken,
}

/// Stateless coordinator for login, refresh, revoke and identity resolution.
///
/// Holds no session state of its own; everything mutable lives in the
/// refresh-token store.
pub struct SessionManager<C, R> {
    credentials: C,
    refresh_tokens: R,
    config: AuthConfig,
}

impl<C, R> SessionManager<C, R>
where
    C: CredentialStore,
    R: RefreshTokenStore,
{
    pub fn new(credentials: C, refresh_tokens: R, config: AuthConfig) -> Self {
        Self {
            credentials,
            refresh_tokens,
            config,
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Check `email` + `password` and, on success, mint an access token and
    /// persist a new refresh token.
    ///
    /// Unknown email and wrong password both return
    /// [`AuthError::InvalidCredential`] after comparable work.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginSession, AuthError> {
        let Some(credential) = self.credentials.find_by_email(email).await? else {
            verify_dummy(password);
            tracing::warn!(kind = "invalid_credential", "Login rejected");
            return Err(AuthError::InvalidCredential);
        };

        let matches = match verify_password(password, &credential.password_hash) {
            Ok(matches) => matches,
            Err(e) => {
                // A corrupt stored hash is our problem, but the caller still
                // only learns that the login failed.
                tracing::error!(user_id = %credential.user_id, error = %e, "Stored password hash is unreadable");
                false
            }
        };
        if !matches {
            tracing::warn!(kind = "invalid_credential", "Login rejected");
            return Err(AuthError::InvalidCredential);
        }

        let access_token = issue_access_token(
            credential.user_id,
            &self.config.secret,
            self.config.access_token_ttl,
        )?;

        let expires_at = Utc::now()
            .checked_add_signed(self.config.refresh_token_ttl)
            .ok_or_else(|| AuthError::Signing("refresh-token lifetime is out of range".into()))?;

        let refresh_token = self
            .refresh_tokens
            .create(&NewRefreshToken {
                token: generate_refresh_token(),
                user_id: credential.user_id,
                expires_at,
            })
            .await?;

        tracing::info!(user_id = %credential.user_id, "Login succeeded");

        Ok(LoginSession {
            user_id: credential.user_id,
            access_token,
            refresh_token,
        })
    }

    /// Exchange a live refresh token for a new access token.
    ///
    /// The refresh token is not rotated; it stays usable until it expires or
    /// is revoked.
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError> {
        let Some(record) = self.refresh_tokens.find_by_token(refresh_token).await? else {
            tracing::warn!(kind = "invalid_token", "Refresh rejected: unknown token");
            return Err(AuthError::InvalidToken("unknown refresh token".into()));
        };

        let revoked = record.is_revoked();
        let expired = record.is_expired_at(Utc::now());

        if revoked || expired {
            tracing::warn!(
                user_id = %record.user_id,
                revoked,
                expired,
                "Refresh rejected: session is no longer active"
            );
            return Err(if revoked {
                AuthError::TokenRevoked
            } else {
                AuthError::TokenExpired
            });
        }

        issue_access_token(
            record.user_id,
            &self.config.secret,
            self.config.access_token_ttl,
        )
    }

    /// Permanently revoke a refresh token.
    ///
    /// Revoking an already-revoked token succeeds; an unknown token is
    /// [`AuthError::RefreshTokenNotFound`].
    pub async fn revoke(&self, refresh_token: &str) -> Result<(), AuthError> {
        if !self.refresh_tokens.revoke(refresh_token).await? {
            tracing::warn!(kind = "refresh_token_not_found", "Revoke target does not exist");
            return Err(AuthError::RefreshTokenNotFound);
        }
        tracing::info!("Refresh token revoked");
        Ok(())
    }

    /// Resolve the identity behind an access token. Never touches storage.
    pub fn resolve_identity(&self, access_token: &str) -> Result<UserId, AuthError> {
        validate_access_token(access_token, &self.config.secret)
    }
}
