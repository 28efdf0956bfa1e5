//! Input collection
//!
//! Turns command-line arguments or a line-oriented reader into tab-free
//! lines ready for [`render_box`](crate::text::boxing::render_box).

use crate::errors::InputError;
use crate::escape::interpret_or_literal;
use crate::text::tabs::expand_tabs;
use std::io::BufRead;
use tracing::debug;

/// Interpret escapes in `raw`, split it on newlines and expand tabs
///
/// # Examples
/// ```
/// use boxit_core::input::decode_text;
///
/// assert_eq!(decode_text(r"a\tb\nc", 4), vec!["a   b", "c"]);
/// ```
pub fn decode_text(raw: &str, tab_stop: usize) -> Vec<String> {
    interpret_or_literal(raw)
        .split('\n')
        .map(|line| expand_tabs(line, tab_stop))
        .collect()
}

/// Lines from positional arguments, joined with single spaces
pub fn lines_from_args(args: &[String], tab_stop: usize) -> Vec<String> {
    let joined = args.join(" ");
    let lines = decode_text(&joined, tab_stop);
    debug!(args = args.len(), lines = lines.len(), "Collected input from arguments");
    lines
}

/// Lines from a reader, read to end of stream
///
/// Each physical line (without its `\n` or `\r\n` terminator) is decoded on
/// its own; an escaped `\n` inside it yields additional lines.
pub fn lines_from_reader<R: BufRead>(reader: R, tab_stop: usize) -> Result<Vec<String>, InputError> {
    let mut lines = Vec::new();
    let mut physical = 0usize;

    for line in reader.lines() {
        let line = line?;
        physical += 1;
        lines.extend(decode_text(&line, tab_stop));
    }

    debug!(physical, lines = lines.len(), "Collected input from reader");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_args_joined_with_spaces() {
        assert_eq!(lines_from_args(&args(&["hello", "world"]), 8), vec!["hello world"]);
    }

    #[test]
    fn test_args_escaped_newline_splits() {
        assert_eq!(
            lines_from_args(&args(&[r"first\nsecond", "line"]), 8),
            vec!["first", "second line"]
        );
    }

    #[test]
    fn test_args_escaped_tab_expands() {
        assert_eq!(
            lines_from_args(&args(&[r"a\tb"]), 8),
            vec![format!("a{}b", " ".repeat(7))]
        );
    }

    #[test]
    fn test_args_malformed_escape_is_literal() {
        assert_eq!(
            lines_from_args(&args(&[r"C:\temp\qux"]), 8),
            vec![r"C:\temp\qux"]
        );
        assert_eq!(
            lines_from_args(&args(&["say", "\"hi\""]), 8),
            vec!["say \"hi\""]
        );
    }

    #[test]
    fn test_raw_newline_in_args_splits() {
        assert_eq!(lines_from_args(&args(&["one\ntwo"]), 8), vec!["one", "two"]);
    }

    #[test]
    fn test_reader_lines_each_decoded() {
        let input = Cursor::new("alpha\r\nbeta\\tgamma\n\\x41\n");
        let lines = lines_from_reader(input, 8).unwrap();
        assert_eq!(
            lines,
            vec!["alpha".to_string(), format!("beta{}gamma", " ".repeat(4)), "A".to_string()]
        );
    }

    #[test]
    fn test_reader_empty_stream() {
        let lines = lines_from_reader(Cursor::new(""), 8).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_reader_keeps_blank_lines() {
        let lines = lines_from_reader(Cursor::new("a\n\nb"), 8).unwrap();
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_reader_invalid_utf8_is_error() {
        let input = Cursor::new(vec![0x66, 0xff, b'\n']);
        assert!(matches!(lines_from_reader(input, 8), Err(InputError::Io(_))));
    }
}
