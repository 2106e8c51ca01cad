//! Repository for the `refresh_tokens` table.

use chirpy_core::auth::refresh::NewRefreshToken;
use chirpy_core::types::UserId;
use sqlx::PgPool;

use crate::models::refresh_token::RefreshTokenRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "token, user_id, expires_at, revoked_at, created_at, updated_at";

/// Provides create / lookup / revoke for refresh tokens.
///
/// There is deliberately no way to change `expires_at` or `user_id` once a
/// row exists.
pub struct RefreshTokenRepo;

impl RefreshTokenRepo {
    /// Insert a new refresh token, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewRefreshToken,
    ) -> Result<RefreshTokenRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO refresh_tokens (token, user_id, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RefreshTokenRow>(&query)
            .bind(&input.token)
            .bind(input.user_id)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a refresh token by exact match, whatever its state.
    pub async fn find_by_token(
        pool: &PgPool,
        token: &str,
    ) -> Result<Option<RefreshTokenRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM refresh_tokens WHERE token = $1");
        sqlx::query_as::<_, RefreshTokenRow>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// Revoke a refresh token. Returns `true` if the row exists.
    ///
    /// A single atomic UPDATE; an existing `revoked_at` is kept, so a token
    /// can never be un-revoked.
    pub async fn revoke(pool: &PgPool, token: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE refresh_tokens SET
                revoked_at = COALESCE(revoked_at, NOW()),
                updated_at = NOW()
             WHERE token = $1",
        )
        .bind(token)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List every refresh token a user has been issued, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Vec<RefreshTokenRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM refresh_tokens
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, RefreshTokenRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
