//! Book DTO.

use alexandria_core::types::ResourceId;
use alexandria_db::models::Book;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BookDto {
    pub id: ResourceId,
    pub author_id: ResourceId,
    pub title: String,
    pub description: Option<String>,
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            author_id: book.author_id,
            title: book.title,
            description: book.description,
        }
    }
}
