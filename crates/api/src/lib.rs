//! HTTP API server for dishes and orders.
//!
//! Provides REST endpoints over two in-memory collections, with structured
//! logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod seed;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use domain::{Dish, DishService, Order, OrderService};
use metrics_exporter_prometheus::PrometheusHandle;
use resource_store::InMemoryRepository;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::fallback::method_not_allowed;
use routes::metrics::MetricsState;
use seed::SeedData;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub dishes: DishService<InMemoryRepository<Dish>>,
    pub orders: OrderService<InMemoryRepository<Order>>,
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(MetricsState {
            handle: metrics_handle,
            app: state.clone(),
        });

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/dishes",
            get(routes::dishes::list)
                .post(routes::dishes::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/dishes/{dish_id}",
            get(routes::dishes::read)
                .put(routes::dishes::update)
                .fallback(method_not_allowed),
        )
        .route(
            "/orders",
            get(routes::orders::list)
                .post(routes::orders::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/orders/{order_id}",
            get(routes::orders::read)
                .put(routes::orders::update)
                .delete(routes::orders::destroy)
                .fallback(method_not_allowed),
        )
        .with_state(state)
        .merge(metrics_router)
        .fallback(routes::fallback::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state with one repository per collection, seeded
/// with the given data.
pub fn create_default_state(seed: SeedData) -> Arc<AppState> {
    let dishes = DishService::new(InMemoryRepository::with_entities(seed.dishes));
    let orders = OrderService::new(InMemoryRepository::with_entities(seed.orders));

    Arc::new(AppState { dishes, orders })
}
