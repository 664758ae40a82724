//! Repository for the `authors` table.

use alexandria_core::query::{PagedList, SortInstruction};
use alexandria_core::types::ResourceId;
use sqlx::PgPool;

use crate::models::author::{Author, AuthorPageQuery, CreateAuthor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, first_name, last_name, date_of_birth, genre, created_at, updated_at";

/// Provides CRUD and paged-listing operations for authors.
pub struct AuthorRepo;

impl AuthorRepo {
    /// Insert a new author, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAuthor) -> Result<Author, sqlx::Error> {
        let query = format!(
            "INSERT INTO authors (first_name, last_name, date_of_birth, genre)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.date_of_birth)
            .bind(&input.genre)
            .fetch_one(pool)
            .await
    }

    /// Insert several authors in one statement, returning the created
    /// rows in input order.
    pub async fn create_many(
        pool: &PgPool,
        inputs: &[CreateAuthor],
    ) -> Result<Vec<Author>, sqlx::Error> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }

        let mut query =
            String::from("INSERT INTO authors (first_name, last_name, date_of_birth, genre) VALUES ");
        let mut param_idx = 1u32;
        for (i, _) in inputs.iter().enumerate() {
            if i > 0 {
                query.push_str(", ");
            }
            query.push_str(&format!(
                "(${}, ${}, ${}, ${})",
                param_idx,
                param_idx + 1,
                param_idx + 2,
                param_idx + 3
            ));
            param_idx += 4;
        }
        query.push_str(&format!(" RETURNING {COLUMNS}"));

        let mut q = sqlx::query_as::<_, Author>(&query);
        for input in inputs {
            q = q
                .bind(&input.first_name)
                .bind(&input.last_name)
                .bind(input.date_of_birth)
                .bind(&input.genre);
        }
        q.fetch_all(pool).await
    }

    /// Find an author by ID.
    pub async fn find_by_id(pool: &PgPool, id: ResourceId) -> Result<Option<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors WHERE id = $1");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find all authors whose ID is in `ids`, ordered by first then
    /// last name. Missing IDs are simply absent from the result.
    pub async fn find_by_ids(
        pool: &PgPool,
        ids: &[ResourceId],
    ) -> Result<Vec<Author>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM authors WHERE id = ANY($1) ORDER BY first_name, last_name"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Whether an author with the given ID exists.
    pub async fn exists(pool: &PgPool, id: ResourceId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM authors WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete an author by ID. Returns `true` if a row was removed.
    /// Books cascade via the FK.
    pub async fn delete(pool: &PgPool, id: ResourceId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// One filtered, ordered page of authors plus the filtered total.
    ///
    /// The ORDER BY clause is assembled from `query.order`, whose field
    /// names come from the registered sort mapping tables (static
    /// strings, never client input). Count runs against the filtered
    /// set before slicing.
    pub async fn list_page(
        pool: &PgPool,
        query: &AuthorPageQuery,
    ) -> Result<PagedList<Author>, sqlx::Error> {
        let (where_clause, bind_values, bind_idx) = build_author_filter(query);
        let order_clause = build_order_clause(&query.order);

        let count_sql = format!("SELECT COUNT(*)::BIGINT FROM authors {where_clause}");
        let mut count_q = sqlx::query_scalar::<_, i64>(&count_sql);
        for value in &bind_values {
            count_q = count_q.bind(value);
        }
        let total_count = count_q.fetch_one(pool).await?;

        let page_size = query.page_size.max(1);
        let offset = (query.page_number - 1).max(0) * page_size;

        let page_sql = format!(
            "SELECT {COLUMNS} FROM authors {where_clause} \
             ORDER BY {order_clause} \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let mut page_q = sqlx::query_as::<_, Author>(&page_sql);
        for value in &bind_values {
            page_q = page_q.bind(value);
        }
        let items = page_q.bind(page_size).bind(offset).fetch_all(pool).await?;

        Ok(PagedList::from_counted(
            items,
            total_count,
            query.page_number,
            page_size,
        ))
    }
}

/// Build the WHERE clause for genre filter and free-text search.
///
/// Returns the clause (possibly empty), the text values to bind in
/// order, and the next free bind index.
fn build_author_filter(query: &AuthorPageQuery) -> (String, Vec<String>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_values: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;

    if let Some(ref genre) = query.genre {
        conditions.push(format!("LOWER(genre) = LOWER(${bind_idx})"));
        bind_values.push(genre.trim().to_string());
        bind_idx += 1;
    }

    if let Some(ref search) = query.search_query {
        conditions.push(format!(
            "(genre ILIKE ${bind_idx} OR first_name ILIKE ${bind_idx} OR last_name ILIKE ${bind_idx})"
        ));
        bind_values.push(format!("%{}%", escape_like(search.trim())));
        bind_idx += 1;
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

/// Escape LIKE metacharacters so a search term containing `%`, `_`, or
/// `\` matches literally instead of acting as a pattern.
fn escape_like(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Render translated sort instructions as an ORDER BY body.
///
/// `id` is always appended as a tiebreaker so paging is deterministic
/// even when the requested ordering has duplicate keys.
fn build_order_clause(order: &[SortInstruction]) -> String {
    let mut parts: Vec<String> = order
        .iter()
        .map(|instruction| {
            format!(
                "{} {}",
                instruction.field,
                if instruction.ascending { "ASC" } else { "DESC" }
            )
        })
        .collect();
    parts.push("id ASC".to_string());
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_query(genre: Option<&str>, search: Option<&str>) -> AuthorPageQuery {
        AuthorPageQuery {
            genre: genre.map(String::from),
            search_query: search.map(String::from),
            order: Vec::new(),
            page_number: 1,
            page_size: 10,
        }
    }

    #[test]
    fn filter_empty_when_no_criteria() {
        let (clause, binds, next_idx) = build_author_filter(&page_query(None, None));
        assert!(clause.is_empty());
        assert!(binds.is_empty());
        assert_eq!(next_idx, 1);
    }

    #[test]
    fn filter_combines_genre_and_search() {
        let (clause, binds, next_idx) = build_author_filter(&page_query(Some("Fantasy"), Some("row")));
        assert_eq!(
            clause,
            "WHERE LOWER(genre) = LOWER($1) AND \
             (genre ILIKE $2 OR first_name ILIKE $2 OR last_name ILIKE $2)"
        );
        assert_eq!(binds, vec!["Fantasy".to_string(), "%row%".to_string()]);
        assert_eq!(next_idx, 3);
    }

    #[test]
    fn search_metacharacters_match_literally() {
        let (_, binds, _) = build_author_filter(&page_query(None, Some("100%_\\")));
        assert_eq!(binds, vec!["%100\\%\\_\\\\%".to_string()]);
    }

    #[test]
    fn order_clause_renders_directions_with_tiebreaker() {
        let clause = build_order_clause(&[
            SortInstruction {
                field: "first_name",
                ascending: true,
            },
            SortInstruction {
                field: "date_of_birth",
                ascending: false,
            },
        ]);
        assert_eq!(clause, "first_name ASC, date_of_birth DESC, id ASC");
    }

    #[test]
    fn order_clause_defaults_to_id() {
        assert_eq!(build_order_clause(&[]), "id ASC");
    }
}
