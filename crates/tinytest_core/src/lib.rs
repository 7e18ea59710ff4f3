//! Provide pure, deterministic helpers for turning interpreter test scripts into tinytest C sources.
//!
//! This crate is intentionally small and dependency-free. It holds the pieces of the generator that
//! have no IO and no global state, so they can be unit tested, property tested and fuzzed in
//! isolation:
//! - [`strings`]: escaping text into adjacent C string literals (and decoding them back),
//! - [`idents`]: turning a test path into a C function identifier,
//! - [`splice`]: inlining the `skip_if` helper in place of its import line,
//! - [`harness`]: the canonical names exposed by the tinytest/upytesthelper headers.
//!
//! ## Notes
//!
//! - File access, selection and rendering live in the `tinytest_codegen` crate; nothing here reads
//!   from disk.

pub mod errors;
pub mod harness;
pub mod idents;
pub mod splice;
pub mod strings;

pub use errors::LiteralError;
pub use idents::{is_c_identifier, test_function_ident};
pub use splice::{contains_helper_import, splice_helper};
pub use strings::{escape_bytes, escape_str, unescape_literals};
