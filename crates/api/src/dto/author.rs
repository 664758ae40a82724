//! Author DTO: the outward representation of an author.
//!
//! Two fields are derived rather than stored: `name` concatenates the
//! first/last name columns and `age` is computed from `date_of_birth`.
//! Both derivations are mirrored in the sort mapping table below so
//! clients can sort by the fields they actually see.

use alexandria_core::age::age_from_date_of_birth;
use alexandria_core::query::{Shapeable, SortMappingTable, SortMappingValue};
use alexandria_core::types::ResourceId;
use alexandria_db::models::Author;
use serde::Serialize;
use serde_json::{json, Value};

/// Type-pair identifiers for the authors sort mapping table.
pub const SORT_SOURCE: &str = "AuthorDto";
pub const SORT_TARGET: &str = "Author";

#[derive(Debug, Clone, Serialize)]
pub struct AuthorDto {
    pub id: ResourceId,
    pub name: String,
    pub age: i32,
    pub genre: String,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            name: format!("{} {}", author.first_name, author.last_name),
            age: age_from_date_of_birth(author.date_of_birth),
            genre: author.genre,
        }
    }
}

impl Shapeable for AuthorDto {
    fn field_names() -> &'static [&'static str] {
        &["id", "name", "age", "genre"]
    }

    fn field_value(&self, name: &str) -> Option<Value> {
        match name.to_lowercase().as_str() {
            "id" => Some(json!(self.id)),
            "name" => Some(json!(self.name)),
            "age" => Some(json!(self.age)),
            "genre" => Some(json!(self.genre)),
            _ => None,
        }
    }
}

/// How each sortable DTO field expands onto `authors` columns.
///
/// `age` runs inverse to `date_of_birth` (older author, earlier date),
/// and `name` spans both name columns in display order.
pub fn sort_mapping_table() -> SortMappingTable {
    SortMappingTable::new(vec![
        ("id", SortMappingValue::to("id")),
        ("genre", SortMappingValue::to("genre")),
        ("age", SortMappingValue::reversed("date_of_birth")),
        (
            "name",
            SortMappingValue::to_many(&["first_name", "last_name"]),
        ),
    ])
}
