pub mod auth;
pub mod health;
pub mod posts;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /healthz               liveness (public, no database)
///
/// /login                 login (public)
/// /refresh               refresh-token bearer -> new access token
/// /revoke                revoke refresh-token bearer
///
/// /users                 create (public), update own credentials (requires auth)
///
/// /posts                 list (public), create (requires auth)
/// /posts/{id}            get (public), delete (owner only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::api_router())
        // Session lifecycle.
        .merge(auth::router())
        // Account management.
        .nest("/users", users::router())
        // Posts.
        .nest("/posts", posts::router())
}
