//! Dish endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::{Envelope, ResourceId};
use domain::{Dish, DishDraft};

use crate::AppState;
use crate::error::ApiError;

/// GET /dishes — list every dish.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Envelope<Vec<Dish>>>, ApiError> {
    let dishes = state.dishes.list().await?;
    Ok(Json(Envelope::new(dishes)))
}

/// POST /dishes — create a dish.
#[tracing::instrument(skip(state, payload))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Envelope<DishDraft>>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<Dish>>), ApiError> {
    let Json(body) = payload?;
    let dish = state.dishes.create(body.into_inner()).await?;
    Ok((StatusCode::CREATED, Json(Envelope::new(dish))))
}

/// GET /dishes/{dish_id} — read one dish.
#[tracing::instrument(skip(state))]
pub async fn read(
    State(state): State<Arc<AppState>>,
    Path(dish_id): Path<String>,
) -> Result<Json<Envelope<Dish>>, ApiError> {
    let dish = state.dishes.read(&ResourceId::from(dish_id)).await?;
    Ok(Json(Envelope::new(dish)))
}

/// PUT /dishes/{dish_id} — replace a dish's fields.
#[tracing::instrument(skip(state, payload))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(dish_id): Path<String>,
    payload: Result<Json<Envelope<DishDraft>>, JsonRejection>,
) -> Result<Json<Envelope<Dish>>, ApiError> {
    let Json(body) = payload?;
    let dish = state
        .dishes
        .update(&ResourceId::from(dish_id), body.into_inner())
        .await?;
    Ok(Json(Envelope::new(dish)))
}
