//! Tracing subscriber setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingSection};
use crate::error::{Error, Result};

/// Filter used when neither `RUST_LOG` nor the configured level parses.
pub const FALLBACK_FILTER: &str = "order_lookup=info";

/// Resolve the filter: `RUST_LOG` wins, then the configured level.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|err| {
            eprintln!("ignoring log level '{level}': {err}; using {FALLBACK_FILTER}");
            EnvFilter::new(FALLBACK_FILTER)
        })
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(logging: &LoggingSection) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(&logging.level));

    let installed = match logging.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init(),
        LogFormat::Text => registry.with(fmt::layer().with_target(false)).try_init(),
    };

    installed.map_err(|e| Error::Logging(e.to_string()))
}
