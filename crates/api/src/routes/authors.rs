//! Route definitions for the `/authors` resource.
//!
//! Also nests the books child resource under `/authors/{author_id}/books`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{authors, books};
use crate::state::AppState;

/// Routes mounted at `/authors`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// POST   /{id}                              -> block_creation
/// DELETE /{id}                              -> delete
///
/// GET    /{author_id}/books                 -> list_for_author
/// POST   /{author_id}/books                 -> create
/// GET    /{author_id}/books/{book_id}       -> get_by_id
/// PUT    /{author_id}/books/{book_id}       -> update (upsert)
/// PATCH  /{author_id}/books/{book_id}       -> patch (upsert)
/// DELETE /{author_id}/books/{book_id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(authors::list).post(authors::create))
        .route(
            "/{id}",
            get(authors::get_by_id)
                .post(authors::block_creation)
                .delete(authors::delete),
        )
        .route(
            "/{author_id}/books",
            get(books::list_for_author).post(books::create),
        )
        .route(
            "/{author_id}/books/{book_id}",
            get(books::get_by_id)
                .put(books::update)
                .patch(books::patch)
                .delete(books::delete),
        )
}
