//! Shared type aliases used across the workspace.

use chrono::{DateTime, Utc};

/// Primary key type for API resources. The public API exposes UUIDs
/// rather than sequential ids.
pub type ResourceId = uuid::Uuid;

/// UTC timestamp stored in `timestamptz` columns.
pub type Timestamp = DateTime<Utc>;
