//! List command implementation
//!
//! Prints every registered box style, as plain names or as JSON including
//! the glyphs of each style.

use anyhow::Result;
use boxit_core::io::Output;
use boxit_core::styles::StyleRegistry;
use boxit_core::text::boxing::BorderGlyphSet;
use serde::Serialize;
use tracing::debug;

use crate::cli::OutputFormat;

/// List command arguments
#[derive(Debug, Clone)]
pub struct ListArgs {
    pub output_format: OutputFormat,
}

/// One entry of the JSON listing
#[derive(Debug, Serialize)]
struct StyleEntry<'a> {
    name: &'a str,
    glyphs: &'a BorderGlyphSet,
}

/// Execute the list command on stdout
pub fn execute_list(args: ListArgs, registry: &StyleRegistry) -> Result<()> {
    let mut output = Output::new(0);
    write_listing(&args, registry, &mut output)?;
    output.flush()
}

fn write_listing(args: &ListArgs, registry: &StyleRegistry, output: &mut Output) -> Result<()> {
    debug!(styles = registry.len(), format = ?args.output_format, "Listing box styles");

    match args.output_format {
        OutputFormat::Text => {
            output.write_line("Available box types:")?;
            for name in registry.names() {
                output.write_line(name)?;
            }
        }
        OutputFormat::Json => {
            let entries: Vec<StyleEntry<'_>> = registry
                .iter()
                .map(|(name, glyphs)| StyleEntry { name, glyphs })
                .collect();
            output.write_json(&entries)?;
        }
    }

    Ok(())
}
