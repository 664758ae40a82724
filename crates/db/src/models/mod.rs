//! Row structs and create/update input structs for each table.

pub mod author;
pub mod book;

pub use author::{Author, AuthorPageQuery, CreateAuthor};
pub use book::{Book, BookForManipulation, CreateBook};
