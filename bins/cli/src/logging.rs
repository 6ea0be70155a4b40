//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use writedown_shared::config::LoggingConfig;

/// Installs the global subscriber. Logs go to stderr; stdout carries the report.
///
/// `RUST_LOG` wins over the configured filter; `verbose` raises the default to debug.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let default_filter = if verbose {
        "writedown=debug".to_string()
    } else {
        config.filter.clone()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init();
    }
}
