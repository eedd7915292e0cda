//! Domain error types.

use resource_store::StoreError;
use thiserror::Error;

use crate::dish::DishError;
use crate::order::OrderError;

/// Broad classification of a failure, independent of the resource involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or malformed field, id mismatch, illegal status value.
    Validation,
    /// Unknown resource id.
    NotFound,
    /// The resource's current state forbids the operation.
    StateConflict,
    /// A storage fault; not caused by the request.
    Internal,
}

impl ErrorKind {
    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::StateConflict => "state_conflict",
            ErrorKind::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A dish guard rejected the request.
    #[error(transparent)]
    Dish(#[from] DishError),

    /// An order guard rejected the request.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// An error occurred in the repository.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl DomainError {
    /// Returns the error classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Dish(err) => err.kind(),
            DomainError::Order(err) => err.kind(),
            DomainError::Store(_) => ErrorKind::Internal,
        }
    }

    /// Returns the resource the error concerns.
    pub fn resource(&self) -> &'static str {
        match self {
            DomainError::Dish(_) => "dish",
            DomainError::Order(_) => "order",
            DomainError::Store(_) => "store",
        }
    }
}
