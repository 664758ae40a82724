//! Book entity model and input structs.

use alexandria_core::types::{ResourceId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A book row from the `books` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Book {
    pub id: ResourceId,
    pub author_id: ResourceId,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a new book under an author.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub description: Option<String>,
}

/// The updatable representation of a book.
///
/// Shared by PUT (full update), PATCH (the JSON Patch document is
/// applied against this shape), and the upsert paths of both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookForManipulation {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
}
