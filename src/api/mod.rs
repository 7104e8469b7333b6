//! HTTP API server

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::order::OrderService;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/orders/:id", get(handlers::get_order))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper wiring a fresh [`OrderService`] into the router
pub fn create_default_router() -> Router {
    create_router(AppState::new(OrderService::new()))
}
