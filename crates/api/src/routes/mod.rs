pub mod author_collections;
pub mod authors;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /authors                                      list, create
/// /authors/{id}                                 get, create-block (POST), delete
/// /authors/{author_id}/books                    list, create
/// /authors/{author_id}/books/{book_id}          get, put, patch, delete
///
/// /authorcollections                            bulk create
/// /authorcollections/{ids}                      multi-get by id list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/authors", authors::router())
        .nest("/authorcollections", author_collections::router())
}
