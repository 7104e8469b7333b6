//! Order lookup - a small HTTP service that resolves order identifiers
//!
//! - `GET /orders/:id?page=N` returns order details as plain text
//! - `GET /health` reports liveness

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod order;
pub mod types;

pub use error::{Error, Result};
