//! Text formatting utilities for CLI output
//!
//! This module provides the box layout algorithm and the tab normalization
//! that runs before it.

pub mod boxing;
pub mod tabs;

pub use boxing::{render_box, BorderGlyphSet};
pub use tabs::{expand_tabs, TAB_STOP};
