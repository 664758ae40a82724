//! Route definitions for the `/authorcollections` bulk resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::author_collections;
use crate::state::AppState;

/// Routes mounted at `/authorcollections`.
///
/// ```text
/// POST /            -> create_collection
/// GET  /{ids}       -> get_collection (comma-separated UUID list)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(author_collections::create_collection))
        .route("/{ids}", get(author_collections::get_collection))
}
