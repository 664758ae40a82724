//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate query-shaping input first (so client errors never
//! reach the database), delegate to the repositories in
//! `alexandria_db`, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod author_collections;
pub mod authors;
pub mod books;
