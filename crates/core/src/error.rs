use crate::types::ResourceId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound {
        entity: &'static str,
        id: ResourceId,
    },

    #[error("Conflict: {0}")]
    Conflict(String),
}
