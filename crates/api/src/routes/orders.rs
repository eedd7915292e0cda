//! Order endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::{Envelope, ResourceId};
use domain::{Order, OrderDraft};

use crate::AppState;
use crate::error::ApiError;

/// GET /orders — list every order.
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Vec<Order>>>, ApiError> {
    let orders = state.orders.list().await?;
    Ok(Json(Envelope::new(orders)))
}

/// POST /orders — place an order.
#[tracing::instrument(skip(state, payload))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Envelope<OrderDraft>>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<Order>>), ApiError> {
    let Json(body) = payload?;
    let order = state.orders.create(body.into_inner()).await?;
    Ok((StatusCode::CREATED, Json(Envelope::new(order))))
}

/// GET /orders/{order_id} — read one order.
#[tracing::instrument(skip(state))]
pub async fn read(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<Json<Envelope<Order>>, ApiError> {
    let order = state.orders.read(&ResourceId::from(order_id)).await?;
    Ok(Json(Envelope::new(order)))
}

/// PUT /orders/{order_id} — change delivery details and status.
#[tracing::instrument(skip(state, payload))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    payload: Result<Json<Envelope<OrderDraft>>, JsonRejection>,
) -> Result<Json<Envelope<Order>>, ApiError> {
    let Json(body) = payload?;
    let order = state
        .orders
        .update(&ResourceId::from(order_id), body.into_inner())
        .await?;
    Ok(Json(Envelope::new(order)))
}

/// DELETE /orders/{order_id} — delete a pending order.
#[tracing::instrument(skip(state))]
pub async fn destroy(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.orders.destroy(&ResourceId::from(order_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
