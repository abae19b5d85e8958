use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::handlers::{chart, healthz, list_presets, metrics_endpoint, search};
use crate::state::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/presets", get(list_presets))
        .route("/api/search", get(search))
        .route("/api/chart", post(chart))
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics_endpoint))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
