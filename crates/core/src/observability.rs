//! Observability utilities for standardized tracing spans and structured fields
//!
//! Each stage of the pipeline runs inside a named span so that JSON logs can
//! be correlated and timed.

use std::time::Instant;
use tracing::{span, Span};

/// Canonical span names for the rendering pipeline
pub mod spans {
    pub const INPUT_READ: &str = "input.read";
    pub const STYLE_RESOLVE: &str = "style.resolve";
    pub const BOX_RENDER: &str = "box.render";
}

/// Common field names for structured logging
pub mod fields {
    pub const SOURCE: &str = "source";
    pub const STYLE: &str = "style";
    pub const LINES: &str = "lines";
    pub const DURATION_MS: &str = "duration_ms";
}

/// Start a span for collecting input from `source` ("args" or "stdin")
pub fn input_read_span(source: &str) -> Span {
    span!(
        target: "boxit_core::observability",
        tracing::Level::INFO,
        spans::INPUT_READ,
        duration_ms = tracing::field::Empty,
        lines = tracing::field::Empty,
        source = %source
    )
}

/// Start a span for looking up a style by name
pub fn style_resolve_span(style: &str) -> Span {
    span!(
        target: "boxit_core::observability",
        tracing::Level::INFO,
        spans::STYLE_RESOLVE,
        duration_ms = tracing::field::Empty,
        style = %style
    )
}

/// Start a span for drawing the box
pub fn box_render_span(style: &str, lines: usize) -> Span {
    span!(
        target: "boxit_core::observability",
        tracing::Level::INFO,
        spans::BOX_RENDER,
        duration_ms = tracing::field::Empty,
        style = %style,
        lines = lines
    )
}

/// Helper for recording duration on span completion
pub struct TimedSpan {
    span: Span,
    start_time: Instant,
    // Keep the span entered for the lifetime of TimedSpan
    _entered: tracing::span::EnteredSpan,
}

impl TimedSpan {
    /// Create a new timed span from an existing span
    pub fn new(span: Span) -> Self {
        let entered = span.clone().entered();
        Self {
            span,
            start_time: Instant::now(),
            _entered: entered,
        }
    }

    /// Complete the span and record duration
    pub fn complete(self) {
        let duration_ms = self.start_time.elapsed().as_millis() as u64;
        self.span.record(fields::DURATION_MS, duration_ms);
    }

    /// Get the underlying span for recording additional fields
    pub fn span(&self) -> &Span {
        &self.span
    }
}
