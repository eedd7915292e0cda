//! Responses for requests no handler accepts.

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Any unmatched path.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Path not found: {}", uri.path()))
}

/// A known path requested with a method it does not support.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{method} not allowed for {}", uri.path()))
}
