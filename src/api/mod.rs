//! HTTP API module for the keep-alive connector
//!
//! # Endpoints
//! - `GET /` — status page
//! - `GET /api/test-db-connection` — database liveness check (JSON)
//! - `GET /health` — service health check
//! - `GET /metrics` — Prometheus metrics

pub mod handlers;
mod state;

use axum::{Router, routing::get};
use std::sync::Arc;

pub use state::AppState;

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/test-db-connection",
            get(handlers::test_db_connection).fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}
