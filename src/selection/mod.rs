//! Test selection
//!
//! Resolves the ordered list of tests to generate. Exactly one mode applies:
//!
//! - **Stdin**: one test path per line, used verbatim. No filtering.
//! - **Scan** (default): start from the given defaults, let a profile replace or edit either set,
//!   union the command-line exclusions, then list `*.py` scripts of every included directory and
//!   drop the excluded ones.
//!
//! Selection is a function of its inputs: the defaults are passed in, never read from ambient
//! state. Whatever the mode, the result is checked so that no two tests share a C function name.
//!
//! ## Modules
//!
//! - `criteria` - Inclusion/exclusion sets and built-in defaults
//! - `discovery` - Directory listing behind the `TestDiscovery` trait
//! - `profile` - Declarative profile files
//! - `test_file` - A selected test and its derived names

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod criteria;
pub mod discovery;
pub mod profile;
pub mod test_file;

use std::collections::HashMap;
use std::io::Read;

pub use criteria::SelectionCriteria;
pub use discovery::{FsDiscovery, MemoryDiscovery, TestDiscovery};
pub use profile::{Profile, SetEdit, SetOverride};
pub use test_file::TestFile;

use crate::errors::{GenError, GenResult};

/// How the test list is obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    /// Read test paths from standard input.
    Stdin,
    /// Scan the included directories.
    Scan {
        /// Replaces the default sets when present
        profile: Option<Profile>,
        /// Extra exclusions, unioned into the active exclusion set
        excludes: Vec<String>,
    },
}

impl Default for SelectionMode {
    fn default() -> Self {
        SelectionMode::Scan {
            profile: None,
            excludes: Vec::new(),
        }
    }
}

/// Select the tests to generate.
///
/// ## Parameters
/// - `defaults`: built-in criteria, the seed a profile revises in scan mode.
/// - `mode`: stdin or scan, with the scan options.
/// - `discovery`: directory listing used in scan mode.
/// - `stdin`: test list source used in stdin mode.
///
/// ## Errors
/// - I/O errors from discovery or from reading `stdin`.
/// - [`GenError::InvalidIdentifier`] / [`GenError::DuplicateIdentifier`] when the selection cannot
///   be turned into distinct C functions.
pub fn select_tests<D, R>(
    defaults: SelectionCriteria,
    mode: SelectionMode,
    discovery: &D,
    stdin: R,
) -> GenResult<Vec<TestFile>>
where
    D: TestDiscovery + ?Sized,
    R: Read,
{
    let paths = match mode {
        SelectionMode::Stdin => read_test_list(stdin)?,
        SelectionMode::Scan { profile, excludes } => {
            let criteria = resolve_criteria(defaults, profile, excludes);
            scan(&criteria, discovery)?
        }
    };

    let tests = paths.into_iter().map(TestFile::new).collect::<GenResult<Vec<_>>>()?;
    check_unique_identifiers(&tests)?;

    tracing::info!(count = tests.len(), "selected tests");
    Ok(tests)
}

/// Compute the criteria in effect for a scan.
///
/// A profile revises the defaults (replacing or editing each set); command-line exclusions are then
/// unioned in.
pub fn resolve_criteria(
    defaults: SelectionCriteria,
    profile: Option<Profile>,
    excludes: Vec<String>,
) -> SelectionCriteria {
    let criteria = match profile {
        Some(profile) => profile.apply(defaults),
        None => defaults,
    };
    criteria.with_excludes(excludes)
}

/// List the scripts of every included directory, minus the excluded paths.
///
/// Directories are visited in set order; each directory's scripts keep the discovery order.
pub fn scan<D>(criteria: &SelectionCriteria, discovery: &D) -> GenResult<Vec<String>>
where
    D: TestDiscovery + ?Sized,
{
    let mut selected = Vec::new();
    for dir in &criteria.test_dirs {
        let found = discovery.list_scripts(dir)?;
        let total = found.len();
        let before = selected.len();
        selected.extend(found.into_iter().filter(|path| !criteria.is_excluded(path)));
        tracing::debug!(
            dir = dir.as_str(),
            found = total,
            kept = selected.len() - before,
            "scanned test directory"
        );
    }
    Ok(selected)
}

/// Read a newline-separated test list. Trailing whitespace is stripped and blank lines skipped.
pub fn read_test_list<R: Read>(mut reader: R) -> GenResult<Vec<String>> {
    let mut input = String::new();
    reader.read_to_string(&mut input).map_err(GenError::Stdin)?;
    Ok(input
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

/// Fail if two selected tests would produce the same C function.
pub fn check_unique_identifiers(tests: &[TestFile]) -> GenResult<()> {
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(tests.len());
    for test in tests {
        if let Some(first) = seen.insert(test.function_ident(), test.path()) {
            return Err(GenError::DuplicateIdentifier {
                ident: test.function_ident().to_string(),
                first: first.to_string(),
                second: test.path().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io;

    fn discovery() -> MemoryDiscovery {
        MemoryDiscovery::new()
            .with_dir("basics", ["foo.py", "foo.py.exp", "bar.py", "bar.py.exp"])
            .with_dir("misc", ["m.py"])
    }

    fn criteria() -> SelectionCriteria {
        SelectionCriteria::new(["misc", "basics"], ["basics/bar.py"])
    }

    fn paths(tests: &[TestFile]) -> Vec<&str> {
        tests.iter().map(TestFile::path).collect()
    }

    #[test]
    fn test_scan_orders_dirs_and_excludes() {
        let tests = select_tests(criteria(), SelectionMode::default(), &discovery(), io::empty()).unwrap();
        assert_eq!(paths(&tests), vec!["basics/foo.py", "misc/m.py"]);
    }

    #[test]
    fn test_cli_excludes_are_unioned() {
        let mode = SelectionMode::Scan {
            profile: None,
            excludes: vec!["misc/m.py".into()],
        };
        let tests = select_tests(criteria(), mode, &discovery(), io::empty()).unwrap();
        assert_eq!(paths(&tests), vec!["basics/foo.py"]);
    }

    #[test]
    fn test_profile_replaces_defaults() {
        let mode = SelectionMode::Scan {
            profile: Some(Profile {
                test_dirs: SetOverride::replace(["basics"]),
                exclude_tests: SetOverride::replace(Vec::<String>::new()),
            }),
            excludes: vec!["basics/foo.py".into()],
        };
        let tests = select_tests(criteria(), mode, &discovery(), io::empty()).unwrap();
        // basics/bar.py is back: the profile dropped the default exclusion
        assert_eq!(paths(&tests), vec!["basics/bar.py"]);
    }

    #[test]
    fn test_profile_adds_to_defaults() {
        let discovery = MemoryDiscovery::new()
            .with_dir("basics", ["ok.py", "bytes_compare3.py"])
            .with_dir("thread", ["t.py", "bad.py"]);
        let mode = SelectionMode::Scan {
            profile: Some(Profile {
                test_dirs: SetOverride::add(["thread"]),
                exclude_tests: SetOverride::add(["thread/bad.py"]),
            }),
            excludes: Vec::new(),
        };
        let tests = select_tests(SelectionCriteria::default(), mode, &discovery, io::empty()).unwrap();
        // basics/bytes_compare3.py stays excluded by default
        assert_eq!(paths(&tests), vec!["basics/ok.py", "thread/t.py"]);
    }

    #[test]
    fn test_stdin_mode_skips_filtering() {
        let input = "basics/bar.py\n\nextra/x.py\r\n";
        let tests = select_tests(criteria(), SelectionMode::Stdin, &discovery(), input.as_bytes()).unwrap();
        assert_eq!(paths(&tests), vec!["basics/bar.py", "extra/x.py"]);
    }

    #[test]
    fn test_stdin_rejects_invalid_utf8() {
        let input: &[u8] = &[b'a', 0xff, b'\n'];
        let err = select_tests(criteria(), SelectionMode::Stdin, &discovery(), input).unwrap_err();
        assert!(matches!(err, GenError::Stdin(_)));
    }

    #[test]
    fn test_colliding_identifiers_fail() {
        let input = "a/b.py\na-b.py\n";
        let err = select_tests(criteria(), SelectionMode::Stdin, &discovery(), input.as_bytes()).unwrap_err();
        match err {
            GenError::DuplicateIdentifier { ident, first, second } => {
                assert_eq!(ident, "test_a_b_py_fn");
                assert_eq!(first, "a/b.py");
                assert_eq!(second, "a-b.py");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_repeated_path_fails() {
        let input = "basics/foo.py\nbasics/foo.py\n";
        assert!(select_tests(criteria(), SelectionMode::Stdin, &discovery(), input.as_bytes()).is_err());
    }

    #[test]
    fn test_resolve_criteria_without_profile_keeps_defaults() {
        let resolved = resolve_criteria(criteria(), None, vec!["x/y.py".into()]);
        assert!(resolved.is_excluded("basics/bar.py"));
        assert!(resolved.is_excluded("x/y.py"));
        assert_eq!(resolved.test_dirs, criteria().test_dirs);
    }
}
