//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io;
use std::path::Path;

use crate::codegen::{Codegen, CodegenConfig};
use crate::selection::{FsDiscovery, Profile, SelectionCriteria, SelectionMode, select_tests};

use super::{CliError, CliResult, ExitCode};

/// Generate the C unit for the selected tests and write it to stdout.
///
/// Paths are relative to the working directory. Everything is read and rendered before the first
/// byte is written, so a failure never leaves partial output on stdout.
pub fn generate(stdin_mode: bool, profile: Option<&Path>, excludes: Vec<String>) -> CliResult<ExitCode> {
    let mode = selection_mode(stdin_mode, profile, excludes)?;

    let discovery = FsDiscovery::new(".");
    let tests = select_tests(SelectionCriteria::default(), mode, &discovery, io::stdin().lock())?;

    let output = Codegen::new(CodegenConfig::default()).generate(&tests)?;

    output
        .write_to(io::stdout().lock())
        .map_err(|e| CliError::failure(format!("error: cannot write generated output: {e}")))?;
    Ok(ExitCode::SUCCESS)
}

/// Build the selection mode from the command-line options.
///
/// The profile is only loaded in scan mode; `--stdin` ignores both scan options.
fn selection_mode(stdin_mode: bool, profile: Option<&Path>, excludes: Vec<String>) -> CliResult<SelectionMode> {
    if stdin_mode {
        if profile.is_some() || !excludes.is_empty() {
            tracing::warn!("--profile and --exclude are ignored with --stdin");
        }
        return Ok(SelectionMode::Stdin);
    }

    let profile = profile.map(Profile::load).transpose()?;
    Ok(SelectionMode::Scan { profile, excludes })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;

    use crate::selection::SetOverride;

    #[test]
    fn test_stdin_mode_ignores_missing_profile() {
        let mode = selection_mode(true, Some(Path::new("does/not/exist.toml")), vec!["a.py".into()]).unwrap();
        assert_eq!(mode, SelectionMode::Stdin);
    }

    #[test]
    fn test_scan_mode_loads_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("port.toml");
        fs::write(&path, "test_dirs = [\"thread\"]\nexclude_tests = []\n").unwrap();

        let mode = selection_mode(false, Some(&path), vec!["thread/x.py".into()]).unwrap();
        match mode {
            SelectionMode::Scan { profile, excludes } => {
                assert_eq!(profile.unwrap().test_dirs, SetOverride::replace(["thread"]));
                assert_eq!(excludes, vec!["thread/x.py"]);
            }
            SelectionMode::Stdin => panic!("expected scan mode"),
        }
    }

    #[test]
    fn test_bad_profile_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("port.toml");
        fs::write(&path, "test_dirs = [\"thread\"]\n").unwrap();

        let err = selection_mode(false, Some(&path), Vec::new()).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("invalid profile"));
    }
}
