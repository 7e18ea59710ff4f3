//! One selected test, identified by its relative path.

use tinytest_core::harness::EXPECTED_OUTPUT_SUFFIX;
use tinytest_core::{is_c_identifier, test_function_ident};

use crate::errors::{GenError, GenResult};

/// A test script selected for generation.
///
/// The function identifier is derived once, at construction, and is guaranteed to be a valid C
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFile {
    path: String,
    ident: String,
}

impl TestFile {
    /// Build a test from its relative path (e.g. `basics/foo.py`).
    ///
    /// ## Errors
    /// - [`GenError::InvalidIdentifier`] if the sanitized path is not a C identifier.
    pub fn new(path: impl Into<String>) -> GenResult<Self> {
        let path = path.into();
        let ident = test_function_ident(&path);
        if !is_c_identifier(&ident) {
            return Err(GenError::InvalidIdentifier { path, ident });
        }
        Ok(Self { path, ident })
    }

    /// Relative path of the script.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Display string used in the test-case table.
    pub fn description(&self) -> &str {
        &self.path
    }

    /// Name of the generated C function.
    pub fn function_ident(&self) -> &str {
        &self.ident
    }

    /// Relative path of the paired expected-output file.
    pub fn expected_output_path(&self) -> String {
        format!("{}{}", self.path, EXPECTED_OUTPUT_SUFFIX)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_attributes() {
        let test = TestFile::new("basics/foo.py").unwrap();
        assert_eq!(test.path(), "basics/foo.py");
        assert_eq!(test.description(), "basics/foo.py");
        assert_eq!(test.function_ident(), "test_basics_foo_py_fn");
        assert_eq!(test.expected_output_path(), "basics/foo.py.exp");
    }

    #[test]
    fn test_rejects_non_identifier_paths() {
        let err = TestFile::new("basics/foo bar.py").unwrap_err();
        assert!(matches!(
            err,
            GenError::InvalidIdentifier { ref ident, .. } if ident == "test_basics_foo bar_py_fn"
        ));
        assert!(TestFile::new("basics/\"quoted\".py").is_err());
    }
}
