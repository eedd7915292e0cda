//! Order model, status lifecycle, guards, and service.

mod entity;
mod guards;
mod service;
mod state;

pub use entity::{Order, OrderDish, OrderDraft, OrderFields};
pub use guards::{
    ensure_order_id_matches, ensure_pending, initial_status, validate_order,
    validate_status_change,
};
pub use service::OrderService;
pub use state::OrderStatus;

use common::ResourceId;
use thiserror::Error;

use crate::error::ErrorKind;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// A required field is missing, empty, or of the wrong type.
    #[error("Order must include a {0}")]
    MissingField(&'static str),

    /// `dishes` is present but not a non-empty list.
    #[error("Order must include at least one dish")]
    NoDishes,

    /// A dish entry lacks a positive integer quantity.
    #[error("Dish {index} must have a quantity that is an integer greater than zero.")]
    InvalidQuantity { index: usize },

    /// The status is missing or not a known status.
    #[error("Order must have a status of pending, preparing, out-for-delivery, delivered")]
    InvalidStatus,

    /// The order is, or would become, delivered.
    #[error("A delivered order cannot be changed")]
    DeliveredImmutable,

    /// The body id disagrees with the stored order's id.
    #[error("Order id does not match route id. Order: {stored_id}, Route: {body_id}")]
    IdMismatch {
        stored_id: ResourceId,
        body_id: String,
    },

    /// Deletion was requested for an order that is not pending.
    #[error("An order cannot be deleted unless it is pending")]
    NotPending,

    /// No order has the requested id.
    #[error("Order Id of {0} is not found.")]
    NotFound(ResourceId),
}

impl OrderError {
    /// Returns the error classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::MissingField(_)
            | OrderError::NoDishes
            | OrderError::InvalidQuantity { .. }
            | OrderError::InvalidStatus
            | OrderError::IdMismatch { .. } => ErrorKind::Validation,
            OrderError::DeliveredImmutable | OrderError::NotPending => ErrorKind::StateConflict,
            OrderError::NotFound(_) => ErrorKind::NotFound,
        }
    }
}
