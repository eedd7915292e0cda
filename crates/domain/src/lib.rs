//! Domain layer for the dish and order API.
//!
//! This crate provides:
//! - Dish and Order models as stored and returned to clients
//! - Guard functions that validate request drafts before any mutation
//! - The `OrderStatus` lifecycle
//! - `DishService` and `OrderService`, which run guard chains against a repository
//!
//! A guard is a function returning `Result`. Services apply guards with `?`
//! in a fixed order, so the first failing guard ends the request and no
//! later guard or mutation runs.

pub mod dish;
pub mod error;
mod fields;
pub mod order;

pub use dish::{Dish, DishDraft, DishError, DishFields, DishService};
pub use error::{DomainError, ErrorKind};
pub use order::{
    Order, OrderDish, OrderDraft, OrderError, OrderFields, OrderService, OrderStatus,
};
