//! Row models and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the table row
//! and the DTOs used for inserts and updates.

pub mod post;
pub mod refresh_token;
pub mod user;
