//! Bearer-token extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use chirpy_core::auth::bearer::parse_bearer;
use chirpy_core::auth::AuthError;
use chirpy_core::types::UserId;

use crate::error::AppError;
use crate::state::AppState;

/// Read the single `Authorization` header and strip the `Bearer` scheme.
///
/// A header whose value is not valid visible ASCII is treated as malformed.
pub fn bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
    let value = match headers.get(AUTHORIZATION) {
        Some(v) => Some(
            v.to_str()
                .map_err(|_| AuthError::MalformedInput("non-ASCII Authorization header"))?,
        ),
        None => None,
    };
    parse_bearer(value).map(str::to_owned)
}

/// Raw bearer value, uninterpreted.
///
/// Used by the refresh and revoke endpoints, where the bearer is an opaque
/// refresh token rather than an access token.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl<S: Send + Sync> FromRequestParts<S> for BearerToken {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(BearerToken(bearer_token(&parts.headers)?))
    }
}

/// Authenticated user resolved from an access token in the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The caller's identity (from `claims.sub`).
    pub user_id: UserId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let user_id = state.sessions.resolve_identity(&token)?;
        Ok(AuthUser { user_id })
    }
}
