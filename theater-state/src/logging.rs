//! Logging infrastructure
//!
//! Centralized tracing setup for the workspace. The host bridge that embeds
//! the accessory usually owns the process's logging; `Silent` keeps this
//! library from contaminating it, while `Development` and `Debug` are for
//! running the accessory standalone.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging mode for different embedding environments
#[derive(Debug, Clone, Copy)]
pub enum LoggingMode {
    /// No output - the host process owns logging
    Silent,
    /// Compact stderr output for development
    Development,
    /// Verbose diagnostics with source locations
    Debug,
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Initialize logging with the specified mode
///
/// Call once, early, before constructing any accessory.
///
/// # Environment Variables
///
/// - `THEATER_LOG_LEVEL`: override the log level (error, warn, info, debug, trace)
/// - `RUST_LOG`: standard fallback filter
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => {
            let subscriber = Registry::default()
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_thread_ids(false)
                        .with_file(false)
                        .with_line_number(false)
                        .compact(),
                )
                .with(env_filter("info"));

            subscriber
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
        LoggingMode::Debug => {
            let subscriber = Registry::default()
                .with(
                    fmt::layer()
                        .pretty()
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(env_filter("debug"));

            subscriber
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
    }
}

/// Initialize logging from the `THEATER_LOG_MODE` environment variable
///
/// Accepts "development" or "debug"; anything else (including unset) is
/// silent, which is the right default when embedded in a host bridge.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = match std::env::var("THEATER_LOG_MODE").as_deref() {
        Ok("development") => LoggingMode::Development,
        Ok("debug") => LoggingMode::Debug,
        _ => LoggingMode::Silent,
    };

    init_logging(mode)
}

/// Explicit silent initialization for embedded use
pub fn init_silent() -> Result<(), LoggingError> {
    init_logging(LoggingMode::Silent)
}

/// Check if a global subscriber has already been installed
pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}

fn env_filter(default_level: &str) -> EnvFilter {
    if let Ok(level) = std::env::var("THEATER_LOG_LEVEL") {
        EnvFilter::new(level)
    } else if let Ok(rust_log) = std::env::var("RUST_LOG") {
        EnvFilter::new(rust_log)
    } else {
        EnvFilter::new(default_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_mode() {
        assert!(init_logging(LoggingMode::Silent).is_ok());
    }

    #[test]
    fn test_mode_is_debuggable() {
        format!("{:?}", LoggingMode::Development);
    }
}
