#![forbid(unsafe_code)]
//! tinytest code generator
//!
//! Turns a tree of MicroPython-style test scripts (`<dir>/<name>.py`, each paired with
//! `<dir>/<name>.py.exp`) into one C source unit for the tinytest/upytesthelper harness. Every test
//! becomes a function embedding its script and expected output as string literals, followed by a
//! test-case table and a single unnamed test-group table.
//!
//! ## Pipeline
//!
//! 1. [`selection`] picks the test paths (directory scan, profile, or a list on stdin).
//! 2. [`codegen`] loads each script, splices the `skip_if` helper, escapes script and expected
//!    output, and renders the C blocks.
//! 3. [`output`] joins the blocks and writes them in one go.
//!
//! ## Panic Policy
//!
//! - **Production code**: `Result` with `?`; the `cli`, `selection` and `codegen` modules deny
//!   `clippy::unwrap_used` and `clippy::expect_used`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod codegen;
pub mod errors;
pub mod input;
pub mod output;
pub mod selection;
pub mod version;

pub use codegen::{Codegen, CodegenConfig, TestRecord};
pub use errors::{GenError, GenResult};
pub use output::GeneratedOutput;
pub use selection::{SelectionCriteria, SelectionMode, TestFile, select_tests};
