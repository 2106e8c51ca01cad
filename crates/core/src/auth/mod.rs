//! Authentication and session-lifecycle primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- Stateless HS256 access-token issuance and validation.
//! - [`refresh`] -- Opaque refresh-token generation and the stored record model.
//! - [`store`] -- Contracts for the credential and refresh-token collaborators.
//! - [`bearer`] -- `Authorization: Bearer <token>` header parsing.
//! - [`guard`] -- Owner-scoped authorization checks.
//! - [`session`] -- [`SessionManager`]: login, refresh, revoke, identity resolution.
//! - [`config`] -- Signing secret and token lifetimes.

pub mod bearer;
pub mod config;
pub mod error;
pub mod guard;
pub mod jwt;
pub mod password;
pub mod refresh;
pub mod session;
pub mod store;

pub use config::AuthConfig;
pub use error::{AuthError, StoreError};
pub use session::SessionManager;
