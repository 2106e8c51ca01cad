//! Request extractors for authentication.
//!
//! - [`auth::AuthUser`] -- Resolves the caller from an access token.
//! - [`auth::BearerToken`] -- The raw bearer value, for refresh-token endpoints.

pub mod auth;
