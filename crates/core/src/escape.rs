//! Backslash escape interpretation
//!
//! Input text is treated as the body of a double-quoted string literal, so
//! `hello\tworld\n!` becomes a real tab and newline. Text that does not parse
//! as such a literal is kept verbatim by [`interpret_or_literal`].

use crate::errors::EscapeError;
use std::str::CharIndices;
use tracing::debug;

/// Interpret `input` as the contents of a double-quoted string
///
/// Supported escapes: `\a \b \f \n \r \t \v \\ \"`, `\xHH`, three-digit octal
/// `\OOO`, `\uHHHH` and `\UHHHHHHHH`. Byte escapes (`\x`, octal) may combine
/// into multi-byte UTF-8 sequences, but the final result must be valid UTF-8.
///
/// # Examples
/// ```
/// use boxit_core::escape::unquote;
///
/// assert_eq!(unquote(r"one\ntwo").unwrap(), "one\ntwo");
/// assert_eq!(unquote(r"\u00e9\xc3\xa9").unwrap(), "éé");
/// assert!(unquote(r"bad \q escape").is_err());
/// assert!(unquote(r#"stray " quote"#).is_err());
/// ```
pub fn unquote(input: &str) -> Result<String, EscapeError> {
    if !input.contains(&['\\', '"', '\n'][..]) {
        return Ok(input.to_string());
    }

    let mut bytes: Vec<u8> = Vec::with_capacity(input.len());
    let mut chars = input.char_indices();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '"' => return Err(EscapeError::UnescapedQuote { offset }),
            '\n' => return Err(EscapeError::RawNewline { offset }),
            '\\' => decode_escape(&mut chars, offset, &mut bytes)?,
            other => push_char(&mut bytes, other),
        }
    }

    String::from_utf8(bytes).map_err(|_| EscapeError::InvalidUtf8)
}

/// Interpret escapes in `input`, falling back to the text as given
pub fn interpret_or_literal(input: &str) -> String {
    match unquote(input) {
        Ok(text) => text,
        Err(err) => {
            debug!(error = %err, "Escape interpretation failed; using literal text");
            input.to_string()
        }
    }
}

fn push_char(bytes: &mut Vec<u8>, ch: char) {
    let mut buf = [0u8; 4];
    bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
}

fn decode_escape(
    chars: &mut CharIndices<'_>,
    offset: usize,
    bytes: &mut Vec<u8>,
) -> Result<(), EscapeError> {
    let (_, code) = chars.next().ok_or(EscapeError::Truncated { offset })?;

    match code {
        'a' => bytes.push(0x07),
        'b' => bytes.push(0x08),
        'f' => bytes.push(0x0c),
        'n' => bytes.push(b'\n'),
        'r' => bytes.push(b'\r'),
        't' => bytes.push(b'\t'),
        'v' => bytes.push(0x0b),
        '\\' => bytes.push(b'\\'),
        '"' => bytes.push(b'"'),
        'x' => {
            let value = read_digits(chars, 2, 16, offset)?;
            bytes.push(value as u8);
        }
        '0'..='7' => {
            let rest = read_digits(chars, 2, 8, offset)?;
            let value = (code as u32 - '0' as u32) * 64 + rest;
            if value > 0xff {
                return Err(EscapeError::OctalOutOfRange { value });
            }
            bytes.push(value as u8);
        }
        'u' | 'U' => {
            let width = if code == 'u' { 4 } else { 8 };
            let value = read_digits(chars, width, 16, offset)?;
            let scalar = char::from_u32(value).ok_or(EscapeError::InvalidCodePoint { value })?;
            push_char(bytes, scalar);
        }
        sequence => return Err(EscapeError::UnknownEscape { sequence }),
    }

    Ok(())
}

fn read_digits(
    chars: &mut CharIndices<'_>,
    count: usize,
    radix: u32,
    offset: usize,
) -> Result<u32, EscapeError> {
    let mut value: u32 = 0;
    for _ in 0..count {
        let (_, digit) = chars.next().ok_or(EscapeError::Truncated { offset })?;
        let d = digit
            .to_digit(radix)
            .ok_or(EscapeError::InvalidDigit { digit })?;
        value = value * radix + d;
    }
    Ok(value)
}
