//! C code generation for selected tests
//!
//! For every selected test, in order:
//! 1. read `<path>` as UTF-8 and inline the `skip_if` helper if the script imports it,
//! 2. read `<path>.exp` as raw bytes,
//! 3. escape both into C string literals and render the test function.
//!
//! Then one test-case table over all tests and one test-group table with a single unnamed group.
//!
//! ## Module Organization
//!
//! - `c_emitter` - Low-level C code string builder
//! - `templates` - Test function, test-case table and test-group table blocks

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod c_emitter;
pub mod templates;

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use tinytest_core::{contains_helper_import, escape_bytes, escape_str, splice_helper};

use crate::errors::{GenError, GenResult};
use crate::input::{read_input, read_input_text};
use crate::output::GeneratedOutput;
use crate::selection::TestFile;
use templates::{TestCaseTable, TestFunction, TestGroupTable};

/// Location of the `skip_if` helper, relative to the input root.
pub const DEFAULT_HELPER_PATH: &str = "../tests/skip_if.py";

/// Name of the single generated test group.
pub const DEFAULT_GROUP: &str = "";

/// Where generation reads its inputs from.
#[derive(Debug, Clone)]
pub struct CodegenConfig {
    /// Directory that test paths are relative to
    pub root: PathBuf,
    /// Helper source spliced in place of `import skip_if`; relative paths start at `root`
    pub helper_path: PathBuf,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            helper_path: PathBuf::from(DEFAULT_HELPER_PATH),
        }
    }
}

impl CodegenConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input root
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the helper source path
    pub fn with_helper_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.helper_path = path.into();
        self
    }

    /// Resolve a path relative to the input root.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}

/// One test ready for rendering. Script and output are already escaped literal sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    /// C function name
    pub name: String,
    /// Test path shown by the harness
    pub description: String,
    pub script: String,
    pub output: String,
}

/// Generator for the tinytest C unit.
///
/// The helper source is read on first use and reused for the rest of the run.
#[derive(Debug)]
pub struct Codegen {
    config: CodegenConfig,
    helper: OnceCell<String>,
}

impl Codegen {
    pub fn new(config: CodegenConfig) -> Self {
        Self {
            config,
            helper: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Load, splice and escape one test.
    ///
    /// ## Errors
    /// - [`GenError::Io`] / [`GenError::InputTooLarge`] if the script, its `.exp` file or the
    ///   helper cannot be read.
    /// - [`GenError::Encoding`] if the script or expected output is not UTF-8.
    pub fn build_record(&self, test: &TestFile) -> GenResult<TestRecord> {
        let script_text = read_input_text(&self.config.resolve(test.path()))?;
        let script = if contains_helper_import(&script_text) {
            tracing::debug!(test = test.path(), "inlining skip_if helper");
            escape_str(&splice_helper(&script_text, self.helper_source()?))
        } else {
            escape_str(&script_text)
        };

        let output_path = self.config.resolve(test.expected_output_path());
        let output_bytes = read_input(&output_path)?;
        let output = escape_bytes(&output_bytes).map_err(|source| GenError::Encoding {
            path: output_path,
            source,
        })?;

        Ok(TestRecord {
            name: test.function_ident().to_string(),
            description: test.description().to_string(),
            script,
            output,
        })
    }

    /// Build every record, then render the complete unit.
    ///
    /// Nothing is rendered unless every test loads successfully.
    pub fn generate(&self, tests: &[TestFile]) -> GenResult<GeneratedOutput> {
        let records = tests
            .iter()
            .map(|test| self.build_record(test))
            .collect::<GenResult<Vec<_>>>()?;
        tracing::info!(tests = records.len(), "generated test records");
        Ok(render(&records))
    }

    fn helper_source(&self) -> GenResult<&str> {
        if let Some(helper) = self.helper.get() {
            return Ok(helper.as_str());
        }
        let path = self.config.resolve(&self.config.helper_path);
        let helper = read_input_text(&path)?;
        tracing::debug!(path = %path.display(), "loaded skip_if helper");
        Ok(self.helper.get_or_init(|| helper).as_str())
    }
}

/// Render records into the ordered block sequence: functions, case table, group table.
pub fn render(records: &[TestRecord]) -> GeneratedOutput {
    let functions = records
        .iter()
        .map(|record| TestFunction::new(record).render())
        .collect();
    let case_table = TestCaseTable::new(DEFAULT_GROUP, records).render();
    let group_table = TestGroupTable::new(vec![DEFAULT_GROUP]).render();
    GeneratedOutput::new(functions, case_table, group_table)
}
