//! Axum router wiring.
//!
//! Telemetry routes plus ops routes, wrapped in a permissive CORS layer
//! (any origin, standard methods and headers) so browser-based test
//! harnesses can call the server directly.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::{app_state::AppState, ops, routes};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/memory-usage", get(routes::memory_usage))
        .route("/active-inactive-pages", get(routes::active_inactive_pages))
        .route("/swap-info", get(routes::swap_info))
        .route("/page-faults", get(routes::page_faults))
        .route("/top-memory-processes", get(routes::top_memory_processes))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
