//! Query-shaping subsystem: client-driven sorting, field projection,
//! and pagination.
//!
//! The three submodules are independent of each other; the HTTP layer
//! composes them per request:
//!
//! 1. `sort` validates and translates the client's `orderBy` expression
//!    into storage-level ordering instructions,
//! 2. the repository returns an ordered, filtered page,
//! 3. `page` wraps it with navigation metadata,
//! 4. `shape` projects the mapped DTOs down to the requested fields.

pub mod page;
pub mod shape;
pub mod sort;

pub use page::PagedList;
pub use shape::{has_fields, shape, shape_collection, Shapeable};
pub use sort::{SortInstruction, SortMappingRegistry, SortMappingTable, SortMappingValue};
