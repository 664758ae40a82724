//! Repository for the `books` table.
//!
//! Books are always scoped to an author; every lookup and mutation
//! carries the `author_id` so a book can never be addressed through
//! another author's route.

use alexandria_core::types::ResourceId;
use sqlx::PgPool;

use crate::models::book::{Book, BookForManipulation, CreateBook};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, author_id, title, description, created_at, updated_at";

/// Provides CRUD operations for books under an author.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book for an author, returning the created row.
    pub async fn create(
        pool: &PgPool,
        author_id: ResourceId,
        input: &CreateBook,
    ) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (author_id, title, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(author_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Insert a book with a caller-chosen ID (PUT/PATCH upsert path).
    pub async fn create_with_id(
        pool: &PgPool,
        author_id: ResourceId,
        book_id: ResourceId,
        input: &BookForManipulation,
    ) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (id, author_id, title, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(book_id)
            .bind(author_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find one of an author's books by ID.
    pub async fn find_for_author(
        pool: &PgPool,
        author_id: ResourceId,
        book_id: ResourceId,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1 AND author_id = $2");
        sqlx::query_as::<_, Book>(&query)
            .bind(book_id)
            .bind(author_id)
            .fetch_optional(pool)
            .await
    }

    /// List all books for an author, ordered by title.
    pub async fn list_for_author(
        pool: &PgPool,
        author_id: ResourceId,
    ) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE author_id = $1 ORDER BY title, id");
        sqlx::query_as::<_, Book>(&query)
            .bind(author_id)
            .fetch_all(pool)
            .await
    }

    /// Fully update one of an author's books.
    ///
    /// Returns `None` if the book does not exist for that author.
    pub async fn update_for_author(
        pool: &PgPool,
        author_id: ResourceId,
        book_id: ResourceId,
        input: &BookForManipulation,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET title = $3, description = $4, updated_at = NOW()
             WHERE id = $1 AND author_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(book_id)
            .bind(author_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete one of an author's books. Returns `true` if a row was removed.
    pub async fn delete_for_author(
        pool: &PgPool,
        author_id: ResourceId,
        book_id: ResourceId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1 AND author_id = $2")
            .bind(book_id)
            .bind(author_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
