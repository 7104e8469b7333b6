//! Core data types

use serde::{Deserialize, Deserializer};

/// Pages above this value are rejected.
pub const PAGE_BOUND: i32 = 10;

/// Body returned when the page bound is exceeded.
pub const INVALID_PAGE_MESSAGE: &str = "Invalid Order Id";

/// Prefix of the detail string returned for a found order.
pub const DETAILS_PREFIX: &str = "Order details for id: ";

/// A single order lookup. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub id: String,
    pub page: Option<i32>,
}

impl OrderRequest {
    pub fn new(id: impl Into<String>, page: Option<i32>) -> Self {
        Self {
            id: id.into(),
            page,
        }
    }
}

/// Query string accepted by `GET /orders/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    /// Empty or blank values (`?page=`) count as absent.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i32>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid page '{}': {}", value, e))),
    }
}

/// Result of an order lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    /// Page exceeded [`PAGE_BOUND`].
    InvalidPage,
    /// Identifier is purely numeric; no details are available.
    NotFound,
    /// Detail string for the order.
    Found(String),
}

impl OrderOutcome {
    /// Short label used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            OrderOutcome::InvalidPage => "invalid_page",
            OrderOutcome::NotFound => "not_found",
            OrderOutcome::Found(_) => "found",
        }
    }

    /// Collapse into the text-or-absent response body.
    pub fn into_body(self) -> Option<String> {
        match self {
            OrderOutcome::InvalidPage => Some(INVALID_PAGE_MESSAGE.to_string()),
            OrderOutcome::NotFound => None,
            OrderOutcome::Found(details) => Some(details),
        }
    }
}
