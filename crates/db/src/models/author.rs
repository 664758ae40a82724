//! Author entity model and input structs.

use alexandria_core::query::SortInstruction;
use alexandria_core::types::{ResourceId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An author row from the `authors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Author {
    pub id: ResourceId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub genre: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a new author. Doubles as the POST request body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuthor {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub genre: String,
}

/// A fully resolved page query for the authors listing.
///
/// Built by the HTTP layer from validated query options: `order` comes
/// out of the sort mapping translation and only ever contains
/// registered column names, never raw client text.
#[derive(Debug, Clone)]
pub struct AuthorPageQuery {
    /// Exact genre filter, matched case-insensitively.
    pub genre: Option<String>,
    /// Free-text search over genre and both name columns.
    pub search_query: Option<String>,
    pub order: Vec<SortInstruction>,
    pub page_number: i64,
    pub page_size: i64,
}
