use crate::commands::list::{execute_list, ListArgs};
use crate::commands::render::{execute_render, RenderArgs};
use anyhow::Result;
use boxit_core::errors::BoxitError;
use boxit_core::observability::{style_resolve_span, TimedSpan};
use boxit_core::styles::{StyleRegistry, DEFAULT_STYLE};
use clap::{Parser, ValueEnum};

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON structured format
    Json,
}

/// Log format options
#[derive(Debug, Clone, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format
    Text,
    /// JSON structured format
    Json,
}

/// Log level options
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warn,
    /// Informational messages and above
    Info,
    /// Debug messages and above
    Debug,
    /// All messages including trace
    Trace,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Level after applying --verbose, which never lowers verbosity
    fn with_verbose(self, verbose: bool) -> Self {
        match self {
            LogLevel::Error | LogLevel::Warn | LogLevel::Info if verbose => LogLevel::Debug,
            other => other,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version,
    about = "Draw a box around text",
    long_about = "Draw a box around text\n\nText is taken from the positional arguments, or from standard input when none are given. Backslash escapes such as \\n and \\t are interpreted when the text forms a valid escaped string.",
    color = clap::ColorChoice::Auto
)]
pub struct Cli {
    /// Print more information (raises the log level to debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// List all available box types
    #[arg(short, long)]
    pub list: bool,

    /// Select box type by name
    #[arg(short = 'b', long = "box", value_name = "NAME", default_value = DEFAULT_STYLE)]
    pub style: String,

    /// Indent box by N spaces
    #[arg(short, long, value_name = "N", default_value_t = 0)]
    pub indent: usize,

    /// Output format for --list
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Log format (text or json, defaults to text, can be set via BOXIT_LOG_FORMAT env var)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Text to draw a box around (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,
}

impl Cli {
    pub fn dispatch(self) -> Result<()> {
        let log_format = match self.log_format {
            Some(LogFormat::Text) => Some("text"),
            Some(LogFormat::Json) => Some("json"),
            None => None, // Let logging module check environment variable
        };

        let log_level = self.log_level.with_verbose(self.verbose).as_str();

        // Set environment variable for log level before initializing logging
        if std::env::var_os("BOXIT_LOG").is_none() && std::env::var_os("RUST_LOG").is_none() {
            std::env::set_var(
                "RUST_LOG",
                format!("boxit={},boxit_core={}", log_level, log_level),
            );
        }
        boxit_core::logging::init(log_format)?;

        tracing::debug!("CLI initialized with log level: {}", log_level);

        let registry = StyleRegistry::builtin();

        if self.list {
            return execute_list(
                ListArgs {
                    output_format: self.output_format,
                },
                &registry,
            );
        }

        let glyphs = {
            let timed_span = TimedSpan::new(style_resolve_span(&self.style));
            let resolved = registry.resolve(&self.style);
            timed_span.complete();
            resolved.map_err(BoxitError::from)?.clone()
        };

        execute_render(RenderArgs {
            text: self.text,
            style: self.style,
            glyphs,
            indent: self.indent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_values() {
        let cli = Cli::parse_from(["boxit"]);
        assert!(!cli.verbose);
        assert!(!cli.list);
        assert_eq!(cli.style, "single");
        assert_eq!(cli.indent, 0);
        assert_eq!(cli.output_format, OutputFormat::Text);
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert!(cli.text.is_empty());
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["boxit", "-v", "-l", "-b", "double", "-i", "4"]);
        assert!(cli.verbose);
        assert!(cli.list);
        assert_eq!(cli.style, "double");
        assert_eq!(cli.indent, 4);
    }

    #[test]
    fn test_long_flags_and_text() {
        let cli = Cli::parse_from(["boxit", "--box", "round", "--indent", "2", "hello", "world"]);
        assert_eq!(cli.style, "round");
        assert_eq!(cli.indent, 2);
        assert_eq!(cli.text, vec!["hello", "world"]);
    }

    #[test]
    fn test_negative_indent_rejected() {
        assert!(Cli::try_parse_from(["boxit", "--indent", "-1"]).is_err());
        assert!(Cli::try_parse_from(["boxit", "--indent", "two"]).is_err());
    }

    #[test]
    fn test_text_after_double_dash() {
        let cli = Cli::parse_from(["boxit", "--", "-not-a-flag"]);
        assert_eq!(cli.text, vec!["-not-a-flag"]);
    }

    #[test]
    fn test_verbose_raises_level() {
        assert_eq!(LogLevel::Warn.with_verbose(true), LogLevel::Debug);
        assert_eq!(LogLevel::Info.with_verbose(true), LogLevel::Debug);
        assert_eq!(LogLevel::Trace.with_verbose(true), LogLevel::Trace);
        assert_eq!(LogLevel::Warn.with_verbose(false), LogLevel::Warn);
    }

    #[test]
    fn test_output_format_json() {
        let cli = Cli::parse_from(["boxit", "--list", "--output-format", "json"]);
        assert_eq!(cli.output_format, OutputFormat::Json);
    }
}
