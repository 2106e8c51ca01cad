//! Post entity model and DTOs.

use chirpy_core::types::{Timestamp, UserId};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: Uuid,
    pub body: String,
    pub user_id: UserId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new post. The owner always comes from the
/// authenticated identity, never from the request body.
#[derive(Debug)]
pub struct CreatePost {
    pub body: String,
    pub user_id: UserId,
}
