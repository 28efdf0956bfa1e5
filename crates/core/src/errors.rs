//! Error types and handling
//!
//! This module provides domain-specific error types for the box renderer.
//! Each domain (style lookup, escape interpretation, input collection) has its
//! own error enum; they are wrapped in the main BoxitError enum for unified
//! error handling.

use thiserror::Error;

/// Style registry errors
#[derive(Error, Debug)]
pub enum StyleError {
    /// Requested style is not registered
    #[error("Unknown box style: {name} (available: {available})")]
    Unknown { name: String, available: String },
}

/// Escape interpretation errors
///
/// These never reach the user: callers fall back to the literal text.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EscapeError {
    /// A double quote appeared without a preceding backslash
    #[error("Unescaped double quote at offset {offset}")]
    UnescapedQuote { offset: usize },

    /// A raw newline is not allowed inside a quoted string
    #[error("Raw newline at offset {offset}")]
    RawNewline { offset: usize },

    /// Backslash followed by a character that is not a known escape
    #[error("Unknown escape sequence: \\{sequence}")]
    UnknownEscape { sequence: char },

    /// Input ended in the middle of an escape sequence
    #[error("Truncated escape sequence at offset {offset}")]
    Truncated { offset: usize },

    /// Escape digits were not valid for their radix
    #[error("Invalid digit {digit:?} in escape sequence")]
    InvalidDigit { digit: char },

    /// `\u`/`\U` escape does not name a Unicode scalar value
    #[error("Invalid code point: U+{value:04X}")]
    InvalidCodePoint { value: u32 },

    /// Octal escape above \377
    #[error("Octal escape out of range: {value}")]
    OctalOutOfRange { value: u32 },

    /// Byte escapes produced an invalid UTF-8 sequence
    #[error("Escaped bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// Input collection errors
#[derive(Error, Debug)]
pub enum InputError {
    /// Reading from the input stream failed
    #[error("Failed to read input")]
    Io(#[from] std::io::Error),
}

/// Main error type for the box renderer
#[derive(Error, Debug)]
pub enum BoxitError {
    /// Style errors
    #[error(transparent)]
    Style(#[from] StyleError),

    /// Escape errors
    #[error("Escape error: {0}")]
    Escape(#[from] EscapeError),

    /// Input errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

/// Convenience type alias for Results with BoxitError
pub type Result<T> = std::result::Result<T, BoxitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_display() {
        let error = StyleError::Unknown {
            name: "fancy".to_string(),
            available: "single, double".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Unknown box style: fancy (available: single, double)"
        );
    }

    #[test]
    fn test_style_error_is_transparent() {
        let error: BoxitError = StyleError::Unknown {
            name: "nope".to_string(),
            available: "single".to_string(),
        }
        .into();
        assert_eq!(
            format!("{}", error),
            "Unknown box style: nope (available: single)"
        );
        assert!(matches!(error, BoxitError::Style(_)));
    }

    #[test]
    fn test_escape_error_conversion() {
        let error: BoxitError = EscapeError::UnknownEscape { sequence: 'q' }.into();
        assert_eq!(
            format!("{}", error),
            "Escape error: Unknown escape sequence: \\q"
        );
    }

    #[test]
    fn test_input_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let error: BoxitError = InputError::from(io_error).into();
        assert_eq!(format!("{}", error), "Input error: Failed to read input");
    }

    #[test]
    fn test_invalid_code_point_display() {
        let error = EscapeError::InvalidCodePoint { value: 0xD800 };
        assert_eq!(format!("{}", error), "Invalid code point: U+D800");
    }
}
