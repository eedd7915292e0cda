//! Dish model, guards, and service.

mod entity;
mod guards;
mod service;

pub use entity::{Dish, DishDraft, DishFields};
pub use guards::{ensure_dish_id_matches, validate_dish};
pub use service::DishService;

use common::ResourceId;
use thiserror::Error;

use crate::error::ErrorKind;

/// Errors that can occur during dish operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DishError {
    /// A required field is missing, empty, or not a string.
    #[error("Dish must include a {0}")]
    MissingField(&'static str),

    /// The price is present but not a positive integer.
    #[error("Dish must have a price that is an integer greater than 0")]
    InvalidPrice,

    /// The body id disagrees with the route id.
    #[error("The id of {body_id} does not match {route_id}")]
    IdMismatch {
        body_id: String,
        route_id: ResourceId,
    },

    /// No dish has the requested id.
    #[error("Dish Id of {0} is not found.")]
    NotFound(ResourceId),
}

impl DishError {
    /// Returns the error classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DishError::MissingField(_) | DishError::InvalidPrice | DishError::IdMismatch { .. } => {
                ErrorKind::Validation
            }
            DishError::NotFound(_) => ErrorKind::NotFound,
        }
    }
}
