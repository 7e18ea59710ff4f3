//! Generator version information.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - The CLI reports it through `--version`; prefer this constant over repeating `env!`.

/// The generator version string (for example, `0.1.0`).
pub const CODEGEN_VERSION: &str = env!("CARGO_PKG_VERSION");
