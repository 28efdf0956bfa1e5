//! Core library for the boxit CLI
//!
//! This crate contains the box layout algorithm, tab expansion, the style
//! registry, escape interpretation, input collection, output, logging, and
//! error handling.

pub mod errors;
pub mod escape;
pub mod input;
pub mod io;
pub mod logging;
pub mod observability;
pub mod styles;
pub mod text;

pub use styles::{StyleRegistry, DEFAULT_STYLE};
pub use text::boxing::{render_box, BorderGlyphSet};
pub use text::tabs::{expand_tabs, TAB_STOP};

/// Get the version of the core library
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
