//! Handlers for the `/posts` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chirpy_core::auth::guard::check_ownership;
use chirpy_core::error::CoreError;
use chirpy_core::posts::validate_body;
use chirpy_db::models::post::{CreatePost, Post};
use chirpy_db::repositories::PostRepo;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /api/posts`.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub body: String,
}

fn not_found(id: Uuid) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Post",
        id: id.to_string(),
    })
}

/// POST /api/posts
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    JsonBody(input): JsonBody<CreatePostRequest>,
) -> AppResult<(StatusCode, Json<Post>)> {
    validate_body(&input.body)?;

    let post = PostRepo::create(
        &state.pool,
        &CreatePost {
            body: input.body,
            user_id: auth_user.user_id,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/posts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Post>>> {
    let posts = PostRepo::list(&state.pool).await?;
    Ok(Json(posts))
}

/// GET /api/posts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Post>> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(post))
}

/// DELETE /api/posts/{id}
///
/// Only the post's owner may delete it.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if let Err(e) = check_ownership(auth_user.user_id, post.user_id) {
        tracing::warn!(user_id = %auth_user.user_id, post_id = %id, "Delete refused: not the owner");
        return Err(e.into());
    }

    if PostRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
