//! Logging and observability
//!
//! This module sets up structured logging with tracing-subscriber. Text or
//! JSON formatting is selected at runtime via environment variables and CLI
//! flags.
//!
//! All logging output is directed to stderr to preserve stdout for the
//! rendered box.

use anyhow::Result;
use std::{io, sync::Once};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the logging system with optional format specification
///
/// Sets up tracing-subscriber with either JSON or text formatting. It can be
/// called multiple times safely; subsequent calls are no-ops.
///
/// ## Arguments
///
/// * `format` - Optional format specification string. Supports:
///   - `None` or `"text"` for human-readable text format
///   - `"json"` for structured JSON format
///
/// ## Environment Variables
///
/// * `BOXIT_LOG_FORMAT` - Log output format when `format` is `None` ("json" for JSON, anything else for text)
/// * `BOXIT_LOG` - Logging filter directives
/// * `RUST_LOG` - Standard Rust logging environment variable (used as fallback)
/// * `BOXIT_LOG_SPAN_EVENTS` - Span lifecycle events to log (`none,new,close,enter,exit,active,full`)
///
/// ## Example
///
/// ```rust
/// use boxit_core::logging;
///
/// logging::init(None).expect("Failed to initialize logging");
/// ```
pub fn init(format: Option<&str>) -> Result<()> {
    INIT.call_once(|| {
        let filter = create_env_filter();

        let env_format = std::env::var("BOXIT_LOG_FORMAT").ok();
        let effective_format = format.or(env_format.as_deref()).unwrap_or("text");

        let span_events = span_events_for_format(effective_format);

        match effective_format {
            "json" => {
                tracing_subscriber::registry()
                    .with(
                        fmt::layer()
                            .json()
                            .with_target(true)
                            .with_span_events(span_events)
                            .with_writer(io::stderr),
                    )
                    .with(filter)
                    .init();
            }
            _ => {
                tracing_subscriber::registry()
                    .with(
                        fmt::layer()
                            .with_target(true)
                            .with_span_events(span_events)
                            .with_writer(io::stderr),
                    )
                    .with(filter)
                    .init();
            }
        }

        tracing::debug!("Logging initialized with format: {}", effective_format);
    });

    Ok(())
}

/// Create an EnvFilter based on environment variables
fn create_env_filter() -> EnvFilter {
    if let Ok(boxit_log) = std::env::var("BOXIT_LOG") {
        EnvFilter::try_new(&boxit_log).unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid BOXIT_LOG specification '{}', using default 'info'",
                boxit_log
            );
            EnvFilter::new("info")
        })
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Parse a comma or pipe separated list of span event names
fn parse_span_events(raw: &str) -> fmt::format::FmtSpan {
    use fmt::format::FmtSpan;

    let mut acc = FmtSpan::NONE;
    for token in raw.split(&[',', '|'][..]).map(|t| t.trim().to_lowercase()) {
        acc |= match token.as_str() {
            "new" => FmtSpan::NEW,
            "close" => FmtSpan::CLOSE,
            "enter" => FmtSpan::ENTER,
            "exit" => FmtSpan::EXIT,
            "active" => FmtSpan::ACTIVE,
            "full" => FmtSpan::FULL,
            _ => FmtSpan::NONE,
        };
    }
    acc
}

/// Determine span lifecycle event configuration based on env var and format
fn span_events_for_format(format: &str) -> fmt::format::FmtSpan {
    use fmt::format::FmtSpan;

    if let Ok(raw) = std::env::var("BOXIT_LOG_SPAN_EVENTS") {
        return parse_span_events(&raw);
    }

    match format {
        "json" => FmtSpan::NEW | FmtSpan::CLOSE,
        _ => FmtSpan::NONE,
    }
}

/// Check if logging has been initialized
pub fn is_initialized() -> bool {
    INIT.is_completed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmt::format::FmtSpan;
    use std::sync::Mutex;

    // Use a mutex to ensure tests don't interfere with each other
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_init_multiple_calls_safe() {
        let _guard = TEST_MUTEX.lock().unwrap();

        assert!(init(None).is_ok());
        assert!(init(Some("json")).is_ok());
        assert!(init(Some("text")).is_ok());
        assert!(init(Some("invalid")).is_ok());
    }

    #[test]
    fn test_is_initialized() {
        let _guard = TEST_MUTEX.lock().unwrap();

        let _ = init(None);
        assert!(is_initialized());
    }

    #[test]
    fn test_parse_span_events() {
        assert_eq!(parse_span_events("none"), FmtSpan::NONE);
        assert_eq!(parse_span_events("new,close"), FmtSpan::NEW | FmtSpan::CLOSE);
        assert_eq!(parse_span_events(" Enter | EXIT "), FmtSpan::ENTER | FmtSpan::EXIT);
        assert_eq!(parse_span_events("bogus"), FmtSpan::NONE);
    }

    #[test]
    fn test_env_filter_creation() {
        // Must not panic regardless of environment contents
        let _filter = create_env_filter();
    }
}
