use thiserror::Error;

use crate::ResourceId;

/// Errors that can occur when interacting with a repository.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No entity with the given id is stored.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: ResourceId },

    /// An entity with the given id is already stored.
    #[error("{kind} with id {id} already exists")]
    DuplicateId { kind: &'static str, id: ResourceId },
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StoreError>;
