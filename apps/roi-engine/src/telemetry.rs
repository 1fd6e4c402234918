//! Tracing Setup
//!
//! Installs a `tracing-subscriber` fmt subscriber writing to stderr, so that
//! reports printed on stdout stay machine-readable.
//!
//! # Configuration
//!
//! - `RUST_LOG`: Filter directives. Overrides `observability.logging.level`.
//! - `observability.logging.format`: `pretty` (default) or `json`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use roi_engine::config::LoggingConfig;
//! use roi_engine::telemetry::init_tracing;
//!
//! init_tracing(&LoggingConfig::default())?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Error returned when a global subscriber is already installed.
pub type TelemetryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Build the filter from `RUST_LOG`, falling back to the configured level.
#[must_use]
pub fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config))
        .with_target(config.include_target)
        .with_writer(std::io::stderr);

    if config.is_json() {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let config = LoggingConfig {
            level: "warn".to_string(),
            ..LoggingConfig::default()
        };
        // Another test may have installed a subscriber first; the second
        // call in this test must fail either way.
        let _ = init_tracing(&config);
        assert!(init_tracing(&config).is_err());
    }

    #[test]
    fn test_filter_uses_configured_level() {
        let config = LoggingConfig {
            level: "roi_engine=debug".to_string(),
            ..LoggingConfig::default()
        };
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(build_env_filter(&config).to_string(), "roi_engine=debug");
        }
    }
}
