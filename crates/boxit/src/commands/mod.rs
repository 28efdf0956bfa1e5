//! Command implementations
//!
//! The CLI either lists the registered box styles or renders input text.

pub mod list;
pub mod render;
