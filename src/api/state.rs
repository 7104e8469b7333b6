//! API server state

use std::sync::Arc;

use crate::order::OrderService;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Order lookup service, supplied at startup
    pub orders: Arc<OrderService>,
}

impl AppState {
    pub fn new(orders: OrderService) -> Self {
        Self {
            orders: Arc::new(orders),
        }
    }
}
