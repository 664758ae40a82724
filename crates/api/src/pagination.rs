//! `X-Pagination` response metadata and page navigation links.
//!
//! List endpoints describe the full result set in a response header so
//! the body stays a plain collection: total count, page geometry, and
//! ready-to-follow previous/next links carrying the caller's filter,
//! search, ordering, and shaping parameters.

use alexandria_core::query::PagedList;
use axum::http::{HeaderMap, HeaderValue};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::AuthorListParams;

/// Name of the pagination metadata response header.
pub const X_PAGINATION: &str = "x-pagination";

/// Serialized into the `X-Pagination` header on list responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub total_count: i64,
    pub page_size: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub previous_page_link: Option<String>,
    pub next_page_link: Option<String>,
}

impl PaginationMetadata {
    /// Build metadata for one page, with previous/next links only where
    /// those pages exist.
    pub fn for_page<T>(page: &PagedList<T>, params: &AuthorListParams, base_path: &str) -> Self {
        let previous_page_link = page
            .has_previous()
            .then(|| page_link(base_path, params, params.page_number - 1));
        let next_page_link = page
            .has_next()
            .then(|| page_link(base_path, params, params.page_number + 1));

        Self {
            total_count: page.total_count,
            page_size: page.page_size,
            current_page: page.current_page,
            total_pages: page.total_pages,
            previous_page_link,
            next_page_link,
        }
    }

    /// Render as a single-header [`HeaderMap`] for inclusion in a response.
    pub fn to_headers(&self) -> AppResult<HeaderMap> {
        let json = serde_json::to_string(self)
            .map_err(|e| AppError::InternalError(format!("serializing pagination header: {e}")))?;
        let value = HeaderValue::from_str(&json)
            .map_err(|e| AppError::InternalError(format!("encoding pagination header: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(X_PAGINATION, value);
        Ok(headers)
    }
}

/// Build the URI for a specific page, re-encoding the caller's other
/// query options so the link is directly followable.
fn page_link(base_path: &str, params: &AuthorListParams, page_number: i64) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::new();

    if let Some(ref fields) = params.fields {
        pairs.push(("fields", fields.clone()));
    }
    pairs.push(("orderBy", params.order_by.clone()));
    if let Some(ref search) = params.search_query {
        pairs.push(("searchQuery", search.clone()));
    }
    if let Some(ref genre) = params.genre {
        pairs.push(("genre", genre.clone()));
    }
    pairs.push(("pageNumber", page_number.to_string()));
    pairs.push(("pageSize", params.page_size.to_string()));

    let query: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();

    format!("{base_path}?{}", query.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> AuthorListParams {
        AuthorListParams {
            page_number: 2,
            page_size: 10,
            search_query: Some("king".to_string()),
            genre: Some("Science fiction".to_string()),
            order_by: "name desc".to_string(),
            fields: Some("id,name".to_string()),
        }
    }

    fn page(total: i64) -> PagedList<i64> {
        PagedList::from_counted(vec![1], total, 2, 10)
    }

    #[test]
    fn links_present_only_for_existing_pages() {
        let meta = PaginationMetadata::for_page(&page(25), &params(), "/api/v1/authors");
        assert!(meta.previous_page_link.is_some());
        assert!(meta.next_page_link.is_some());

        // 2 pages total: page 2 is the last one.
        let meta = PaginationMetadata::for_page(&page(15), &params(), "/api/v1/authors");
        assert!(meta.previous_page_link.is_some());
        assert!(meta.next_page_link.is_none());
    }

    #[test]
    fn links_carry_all_query_options() {
        let meta = PaginationMetadata::for_page(&page(25), &params(), "/api/v1/authors");
        let next = meta.next_page_link.unwrap();

        assert!(next.starts_with("/api/v1/authors?"));
        assert!(next.contains("fields=id%2Cname"));
        assert!(next.contains("orderBy=name%20desc"));
        assert!(next.contains("searchQuery=king"));
        assert!(next.contains("genre=Science%20fiction"));
        assert!(next.contains("pageNumber=3"));
        assert!(next.contains("pageSize=10"));

        let previous = meta.previous_page_link.unwrap();
        assert!(previous.contains("pageNumber=1"));
    }

    #[test]
    fn absent_options_are_omitted_from_links() {
        let params = AuthorListParams {
            search_query: None,
            genre: None,
            fields: None,
            ..params()
        };
        let meta = PaginationMetadata::for_page(&page(25), &params, "/api/v1/authors");
        let next = meta.next_page_link.unwrap();
        assert!(!next.contains("searchQuery"));
        assert!(!next.contains("genre"));
        assert!(!next.contains("fields"));
    }

    #[test]
    fn header_round_trips_as_json() {
        let meta = PaginationMetadata::for_page(&page(25), &params(), "/api/v1/authors");
        let headers = meta.to_headers().unwrap();
        let raw = headers.get(X_PAGINATION).unwrap().to_str().unwrap();

        let parsed: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed["totalCount"], 25);
        assert_eq!(parsed["totalPages"], 3);
        assert_eq!(parsed["currentPage"], 2);
    }
}
