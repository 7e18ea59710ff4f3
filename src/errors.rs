//! Errors raised while selecting tests and generating the C unit.
//!
//! Every variant is fatal: generation is a build step, and partial output would silently corrupt
//! the generated source.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort generation.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("cannot read profile '{}': {source}", path.display())]
    ProfileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid profile '{}': {message}", path.display())]
    ProfileInvalid { path: PathBuf, message: String },

    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is too large ({size} bytes, max {max} bytes)", path.display())]
    InputTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("'{}' is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("cannot read test list from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("test path '{path}' does not map to a C identifier (got '{ident}')")]
    InvalidIdentifier { path: String, ident: String },

    #[error("tests '{first}' and '{second}' both map to function '{ident}'")]
    DuplicateIdentifier { ident: String, first: String, second: String },
}

/// Result type for generation operations.
pub type GenResult<T> = Result<T, GenError>;
