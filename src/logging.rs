//! Tracing bootstrap for host applications embedding the engine.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Initialize the global tracing subscriber
///
/// The configured level acts as the default filter; a RUST_LOG environment
/// variable overrides it. Calling this more than once keeps the first
/// subscriber, so tests can call it freely.
pub fn init(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.clone()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let result = if settings.format == "pretty" {
        subscriber.pretty().try_init()
    } else {
        subscriber.try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed, keeping it");
    }
}
