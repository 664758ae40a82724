use std::sync::Arc;

use alexandria_core::query::SortMappingRegistry;

use crate::config::ServerConfig;
use crate::dto;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: alexandria_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Sort mapping tables, registered once at startup and read-only
    /// afterward, so they are shared across requests without locking.
    pub sort_mappings: Arc<SortMappingRegistry>,
}

/// Register every sort mapping table the API uses.
///
/// Called once during startup (and by test setup). Panics on duplicate
/// registration, which makes the table-uniqueness invariant a
/// startup-time assertion.
pub fn build_sort_mappings() -> SortMappingRegistry {
    let mut registry = SortMappingRegistry::new();
    registry.register(
        dto::author::SORT_SOURCE,
        dto::author::SORT_TARGET,
        dto::author::sort_mapping_table(),
    );
    registry
}
