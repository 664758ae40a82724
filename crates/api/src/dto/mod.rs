//! Outward-facing DTOs.
//!
//! Entities never leave the persistence layer directly: handlers map
//! rows into these types before serialization, so storage columns can
//! change (or be combined, like author names) without breaking the API.

pub mod author;
pub mod book;

pub use author::AuthorDto;
pub use book::BookDto;
