//! Route definitions for the `/posts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Routes mounted at `/posts`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create (requires auth)
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete (owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list).post(posts::create))
        .route("/{id}", get(posts::get_by_id).delete(posts::delete))
}
