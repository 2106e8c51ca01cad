//! Handlers for the session endpoints (login, refresh, revoke).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chirpy_core::types::{Timestamp, UserId};
use chirpy_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::BearerToken;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login: the caller's profile plus both tokens.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id: UserId,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Access token.
    pub token: String,
    pub refresh_token: String,
}

/// Response for `POST /api/refresh`.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/login
///
/// Authenticate with email + password. Any credential failure is a plain 401.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let session = state.sessions.login(&input.email, &input.password).await?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!("User {} vanished during login", session.user_id))
        })?;

    Ok(Json(LoginResponse {
        id: user.id,
        email: user.email,
        created_at: user.created_at,
        updated_at: user.updated_at,
        token: session.access_token,
        refresh_token: session.refresh_token.token,
    }))
}

/// POST /api/refresh
///
/// Exchange the refresh token in the `Authorization` header for a new access
/// token. The refresh token itself is unchanged.
pub async fn refresh(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> AppResult<Json<RefreshResponse>> {
    let token = state.sessions.refresh(&token).await?;
    Ok(Json(RefreshResponse { token }))
}

/// POST /api/revoke
///
/// Revoke the refresh token in the `Authorization` header. Returns 204.
pub async fn revoke(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> AppResult<StatusCode> {
    state.sessions.revoke(&token).await?;
    Ok(StatusCode::NO_CONTENT)
}
