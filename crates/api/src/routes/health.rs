//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub dishes: usize,
    pub orders: usize,
}

/// GET /health — returns liveness plus the size of each collection.
pub async fn check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        dishes: state.dishes.repository().len().await,
        orders: state.orders.repository().len().await,
    })
}
