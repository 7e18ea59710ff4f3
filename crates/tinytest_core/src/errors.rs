//! Errors produced while decoding generated C string literals.
//!
//! Only the decoder can fail: escaping accepts any text.

use std::fmt;

/// Represent a malformed sequence of adjacent C string literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    /// A character other than whitespace appeared between two literals.
    UnexpectedChar { offset: usize, ch: char },
    /// The input ended inside a literal.
    Unterminated,
    /// A raw newline appeared inside a literal.
    RawNewline { offset: usize },
    /// A backslash escape the generator never emits.
    UnknownEscape { offset: usize, ch: char },
    /// An octal escape produced a value above `0o377`.
    OctalOutOfRange { offset: usize },
    /// The decoded bytes are not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralError::UnexpectedChar { offset, ch } => {
                write!(f, "unexpected {ch:?} between string literals at byte {offset}")
            }
            LiteralError::Unterminated => write!(f, "unterminated string literal"),
            LiteralError::RawNewline { offset } => write!(f, "raw newline inside string literal at byte {offset}"),
            LiteralError::UnknownEscape { offset, ch } => write!(f, "unknown escape '\\{ch}' at byte {offset}"),
            LiteralError::OctalOutOfRange { offset } => write!(f, "octal escape out of range at byte {offset}"),
            LiteralError::InvalidUtf8 => write!(f, "decoded literal is not valid UTF-8"),
        }
    }
}

impl std::error::Error for LiteralError {}
