//! Diagnostics Setup
//!
//! Installs a tracing subscriber writing to stderr, so stdout carries only
//! the result line.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber with `filter` (e.g. "warn", "usecases_words=debug")
///
/// An unparsable filter falls back to "warn".
pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(crate::env::DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}
