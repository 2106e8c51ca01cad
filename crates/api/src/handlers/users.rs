//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chirpy_core::auth::password::hash_password;
use chirpy_core::error::CoreError;
use chirpy_db::models::user::{CreateUser, UpdateCredentials, UserResponse};
use chirpy_db::repositories::UserRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for creating or updating an account.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub password: String,
}

/// Unique constraint on `users.email`.
const EMAIL_CONSTRAINT: &str = "uq_users_email";

/// A duplicate email is a conflict on the account, not a storage fault.
fn email_conflict(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.constraint() == Some(EMAIL_CONSTRAINT) => {
            CoreError::Conflict("Email is already registered".into()).into()
        }
        _ => err.into(),
    }
}

fn validate_input(input: &CredentialsRequest) -> AppResult<()> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    validate_input(&input)?;

    let password_hash = hash_password(&input.password)?;
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            password_hash,
        },
    )
    .await
    .map_err(email_conflict)?;

    tracing::info!(user_id = %user.id, "User created");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// PUT /api/users
///
/// Replace the caller's own email and password.
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    JsonBody(input): JsonBody<CredentialsRequest>,
) -> AppResult<Json<UserResponse>> {
    validate_input(&input)?;

    let password_hash = hash_password(&input.password)?;
    let user = UserRepo::update_credentials(
        &state.pool,
        auth_user.user_id,
        &UpdateCredentials {
            email: input.email,
            password_hash,
        },
    )
    .await
    .map_err(email_conflict)?
    .ok_or_else(|| CoreError::NotFound {
        entity: "User",
        id: auth_user.user_id.to_string(),
    })?;

    Ok(Json(user.into()))
}
