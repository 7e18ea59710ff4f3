//! CLI module for the tinytest code generator
//!
//! ## Usage
//!
//! - `tinytest-codegen` - scan the default test directories
//! - `tinytest-codegen --exclude basics/foo.py` - scan, dropping extra tests (repeatable)
//! - `tinytest-codegen --profile port.toml` - scan with directories/exclusions from a profile
//! - `tinytest-codegen --stdin < tests.txt` - generate exactly the listed tests
//!
//! The generated C unit goes to stdout; diagnostics and logs go to stderr.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::errors::GenError;
use crate::version::CODEGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<GenError> for CliError {
    fn from(err: GenError) -> Self {
        CliError::failure(format!("error: {err}"))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Convert MicroPython tests to tinytest/upytesthelper C code
#[derive(Parser, Debug)]
#[command(name = "tinytest-codegen")]
#[command(version = CODEGEN_VERSION)]
#[command(about = "Convert MicroPython tests to tinytest/upytesthelper C code", long_about = None)]
pub struct Cli {
    /// Read the list of tests from stdin, one path per line
    #[arg(long)]
    pub stdin: bool,

    /// Exclude a test by path (repeatable; ignored with --stdin)
    #[arg(long = "exclude", value_name = "PATH")]
    pub exclude: Vec<String>,

    /// Profile file providing test directories and exclusion list (ignored with --stdin)
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    commands::generate(cli.stdin, cli.profile.as_deref(), cli.exclude)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::try_parse_from(["tinytest-codegen"]).unwrap();
        assert!(!cli.stdin);
        assert!(cli.exclude.is_empty());
        assert!(cli.profile.is_none());
    }

    #[test]
    fn test_cli_parse_repeated_exclude() {
        let cli = Cli::try_parse_from([
            "tinytest-codegen",
            "--exclude",
            "basics/a.py",
            "--exclude",
            "misc/b.py",
        ])
        .unwrap();
        assert_eq!(cli.exclude, vec!["basics/a.py", "misc/b.py"]);
    }

    #[test]
    fn test_cli_parse_stdin_with_profile() {
        let cli = Cli::try_parse_from(["tinytest-codegen", "--stdin", "--profile", "port.toml"]).unwrap();
        assert!(cli.stdin);
        assert_eq!(cli.profile.as_deref(), Some(std::path::Path::new("port.toml")));
    }

    #[test]
    fn test_cli_rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["tinytest-codegen", "--output", "x.c"]).is_err());
        assert!(Cli::try_parse_from(["tinytest-codegen", "basics"]).is_err());
    }

    #[test]
    fn test_gen_error_maps_to_failure() {
        let err: CliError = GenError::InvalidIdentifier {
            path: "a b.py".into(),
            ident: "test_a b_py_fn".into(),
        }
        .into();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.starts_with("error: "));
    }
}
