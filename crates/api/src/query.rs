//! Shared query parameter types for API handlers.

use serde::{Deserialize, Deserializer};

/// Hard ceiling on page size; larger requests are clamped, not rejected.
pub const MAX_PAGE_SIZE: i64 = 20;
/// Page size used when the client does not send one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Ordering applied when the client does not send `orderBy`.
pub const DEFAULT_ORDER_BY: &str = "name";

/// Query options for the authors listing
/// (`?pageNumber=&pageSize=&searchQuery=&genre=&orderBy=&fields=`).
///
/// Bounds are applied while deserializing, so a constructed value is
/// already normalized and immutable from then on: `page_number` is at
/// least 1 and `page_size` sits in `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone)]
pub struct AuthorListParams {
    pub page_number: i64,
    pub page_size: i64,
    pub search_query: Option<String>,
    pub genre: Option<String>,
    pub order_by: String,
    pub fields: Option<String>,
}

impl Default for AuthorListParams {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search_query: None,
            genre: None,
            order_by: DEFAULT_ORDER_BY.to_string(),
            fields: None,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawAuthorListParams {
    page_number: Option<i64>,
    page_size: Option<i64>,
    search_query: Option<String>,
    genre: Option<String>,
    order_by: Option<String>,
    fields: Option<String>,
}

impl<'de> Deserialize<'de> for AuthorListParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawAuthorListParams::deserialize(deserializer)?;
        Ok(Self {
            page_number: raw.page_number.unwrap_or(1).max(1),
            page_size: raw
                .page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
            search_query: raw.search_query.filter(|s| !s.trim().is_empty()),
            genre: raw.genre.filter(|s| !s.trim().is_empty()),
            order_by: raw
                .order_by
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ORDER_BY.to_string()),
            fields: raw.fields,
        })
    }
}

/// Query parameters for single-resource endpoints that support data
/// shaping (`?fields=`).
#[derive(Debug, Default, Deserialize)]
pub struct FieldsParams {
    pub fields: Option<String>,
}
