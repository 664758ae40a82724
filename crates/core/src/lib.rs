//! Domain logic for the Alexandria authors/books API.
//!
//! Everything in this crate is pure and I/O-free: error types, shared
//! type aliases, and the query-shaping subsystem (sort mapping, field
//! projection, paging) consumed by the HTTP and persistence layers.

pub mod age;
pub mod error;
pub mod query;
pub mod types;

pub use error::CoreError;
