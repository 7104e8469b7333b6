//! API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::types::{OrderRequest, PageQuery};

/// Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Look up an order
///
/// `id` comes from the path and `page` from the query string. Every outcome
/// is a 200; a missing result is an empty body.
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    let request = OrderRequest::new(id, query.page);
    let outcome = state.orders.lookup(&request);

    tracing::debug!(
        id = %request.id,
        page = ?request.page,
        outcome = outcome.kind(),
        "Order lookup"
    );

    match outcome.into_body() {
        Some(body) => (StatusCode::OK, body).into_response(),
        None => StatusCode::OK.into_response(),
    }
}
