//! HTTP layer for the Alexandria authors/books API.
//!
//! Exposed as a library so integration tests can build the same router
//! the production binary serves.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod pagination;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
