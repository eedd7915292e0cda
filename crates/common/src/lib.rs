//! Shared types for the dish and order API.

pub mod envelope;
pub mod types;

pub use envelope::Envelope;
pub use types::{ResourceId, next_id};
