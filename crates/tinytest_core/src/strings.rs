//! Encode text as adjacent C string literals, and decode them back.
//!
//! The generated sources embed every script and every expected output as a `static const char[]`
//! initialiser. Newlines break the literal (`"...\n"` newline `"..."`) so generated lines stay as
//! long as the source lines, and adjacent literals concatenate at compile time.
//!
//! ## Notes
//! - Escaped characters: NUL, tab, carriage return, backslash, double quote and newline. Everything
//!   else, including non-ASCII text, is copied through unchanged.
//! - NUL is written as `\0`, or as `\000` when the next character is an octal digit; a bare `\0`
//!   would otherwise swallow that digit into a longer octal escape.
//! - The result always starts with an empty literal on its own line, so an empty input still expands
//!   to a well-formed initialiser.

use std::iter::Peekable;
use std::str::CharIndices;
use std::str::Utf8Error;

use crate::errors::LiteralError;

/// Break between two adjacent literals, emitted after every escaped newline.
pub const LITERAL_BREAK: &str = "\"\n\"";

/// Prefix of every escaped literal sequence: an empty literal followed by the opening quote.
pub const LITERAL_PREFIX: &str = "\"\"\n\"";

/// Escape UTF-8 text into a sequence of adjacent C string literals.
///
/// ## Parameters
/// - `text`: the text to embed.
///
/// ## Returns
/// - `String`: source text such as `""\n"print(1)\n"\n""`, ready to place after `=`.
///
/// ## Examples
/// ```rust
/// use tinytest_core::escape_str;
///
/// assert_eq!(escape_str("a\"b"), "\"\"\n\"a\\\"b\"");
/// assert_eq!(escape_str("x\n"), "\"\"\n\"x\\n\"\n\"\"");
/// ```
pub fn escape_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8 + LITERAL_PREFIX.len() + 1);
    out.push_str(LITERAL_PREFIX);

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\0' => {
                if chars.peek().is_some_and(|next| next.is_digit(8)) {
                    out.push_str("\\000");
                } else {
                    out.push_str("\\0");
                }
            }
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => {
                out.push_str("\\n");
                out.push_str(LITERAL_BREAK);
            }
            other => out.push(other),
        }
    }

    out.push('"');
    out
}

/// Decode raw bytes as UTF-8 and escape them (see [`escape_str`]).
///
/// ## Errors
/// - Returns the UTF-8 decoding error if `bytes` is not valid UTF-8.
pub fn escape_bytes(bytes: &[u8]) -> Result<String, Utf8Error> {
    std::str::from_utf8(bytes).map(escape_str)
}

/// Decode a sequence of adjacent C string literals back into text.
///
/// Whitespace between literals is ignored, matching C's literal concatenation. Only the escapes
/// produced by [`escape_str`] plus general octal escapes are accepted.
///
/// ## Errors
/// - [`LiteralError`] when the input is not a well-formed literal sequence, or when the decoded
///   bytes are not UTF-8.
pub fn unescape_literals(source: &str) -> Result<String, LiteralError> {
    let mut bytes = Vec::with_capacity(source.len());
    let mut chars = source.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '"' => read_literal(&mut chars, &mut bytes)?,
            c if c.is_ascii_whitespace() => {}
            c => return Err(LiteralError::UnexpectedChar { offset, ch: c }),
        }
    }

    String::from_utf8(bytes).map_err(|_| LiteralError::InvalidUtf8)
}

/// Read one literal body; the opening quote has already been consumed.
fn read_literal(chars: &mut Peekable<CharIndices<'_>>, out: &mut Vec<u8>) -> Result<(), LiteralError> {
    while let Some((offset, ch)) = chars.next() {
        match ch {
            '"' => return Ok(()),
            '\n' => return Err(LiteralError::RawNewline { offset }),
            '\\' => {
                let Some((esc_offset, esc)) = chars.next() else {
                    return Err(LiteralError::Unterminated);
                };
                match esc {
                    'n' => out.push(b'\n'),
                    't' => out.push(b'\t'),
                    'r' => out.push(b'\r'),
                    '\\' => out.push(b'\\'),
                    '"' => out.push(b'"'),
                    '0'..='7' => out.push(read_octal(esc, esc_offset, chars)?),
                    other => return Err(LiteralError::UnknownEscape { offset: esc_offset, ch: other }),
                }
            }
            other => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
    Err(LiteralError::Unterminated)
}

/// Read an octal escape of at most three digits, `first` included.
fn read_octal(first: char, offset: usize, chars: &mut Peekable<CharIndices<'_>>) -> Result<u8, LiteralError> {
    let mut value = u32::from(first) - u32::from('0');
    for _ in 0..2 {
        match chars.peek().and_then(|&(_, d)| d.to_digit(8)) {
            Some(digit) => {
                value = value * 8 + digit;
                chars.next();
            }
            None => break,
        }
    }
    u8::try_from(value).map_err(|_| LiteralError::OctalOutOfRange { offset })
}
