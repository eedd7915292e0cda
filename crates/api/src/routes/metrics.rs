//! Prometheus metrics endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::AppState;

/// State for the metrics router: the exporter handle and the collections it reports on.
#[derive(Clone)]
pub struct MetricsState {
    pub handle: PrometheusHandle,
    pub app: Arc<AppState>,
}

/// GET /metrics — returns Prometheus-formatted metrics.
///
/// Collection sizes are sampled into gauges on each scrape.
pub async fn get(State(state): State<MetricsState>) -> impl IntoResponse {
    metrics::gauge!("dishes_stored").set(state.app.dishes.repository().len().await as f64);
    metrics::gauge!("orders_stored").set(state.app.orders.repository().len().await as f64);

    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        state.handle.render(),
    )
}
