//! Render command implementation
//!
//! Collects input text, draws the box, and writes it to stdout.

use anyhow::{Context, Result};
use boxit_core::input::{lines_from_args, lines_from_reader};
use boxit_core::io::Output;
use boxit_core::observability::{box_render_span, fields, input_read_span, TimedSpan};
use boxit_core::text::boxing::{render_box, BorderGlyphSet};
use boxit_core::text::tabs::TAB_STOP;
use std::io::BufRead;
use tracing::{debug, info};

/// Render command arguments
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Positional text; empty means read stdin
    pub text: Vec<String>,
    /// Style name, for logging
    pub style: String,
    pub glyphs: BorderGlyphSet,
    pub indent: usize,
}

/// Execute the render command against stdin and stdout
pub fn execute_render(args: RenderArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let mut output = Output::new(args.indent);
    render_to(&args, stdin.lock(), &mut output)?;
    output.flush()
}

fn render_to<R: BufRead>(args: &RenderArgs, stdin: R, output: &mut Output) -> Result<()> {
    info!("Starting render command");
    debug!("Render args: {:?}", args);

    let lines = collect_lines(&args.text, stdin)?;

    let timed_span = TimedSpan::new(box_render_span(&args.style, lines.len()));
    let rows = render_box(&lines, &args.glyphs);
    timed_span.complete();

    output.write_lines(&rows)
}

/// Lines from positional text when present, otherwise from `stdin`
fn collect_lines<R: BufRead>(text: &[String], stdin: R) -> Result<Vec<String>> {
    let source = if text.is_empty() { "stdin" } else { "args" };
    let timed_span = TimedSpan::new(input_read_span(source));

    let lines = if text.is_empty() {
        lines_from_reader(stdin, TAB_STOP).context("Failed to read text from stdin")?
    } else {
        lines_from_args(text, TAB_STOP)
    };

    timed_span.span().record(fields::LINES, lines.len());
    timed_span.complete();
    Ok(lines)
}
