//! Canonical names from the tinytest and upytesthelper C headers.
//!
//! Generated sources must agree with the harness on these spellings, so they live in one place
//! instead of being repeated inside templates.

/// Struct type of one test-case table entry.
pub const TESTCASE_STRUCT: &str = "testcase_t";

/// Struct type of one test-group table entry.
pub const TESTGROUP_STRUCT: &str = "testgroup_t";

/// Name of the generated group table.
pub const GROUPS_TABLE: &str = "groups";

/// Suffix appended to a group name to form its test-case table name.
pub const TESTS_TABLE_SUFFIX: &str = "_tests";

/// Sentinel closing a test-case table.
pub const END_OF_TESTCASES: &str = "END_OF_TESTCASES";

/// Sentinel closing a test-group table.
pub const END_OF_GROUPS: &str = "END_OF_GROUPS";

/// Default flags of a generated test case.
pub const TT_ENABLED: &str = "TT_ENABLED_";

/// Registers the expected output of the test about to run.
pub const SET_EXPECTED_OUTPUT_FN: &str = "upytest_set_expected_output";

/// Runs a script on the interpreter.
pub const EXECUTE_TEST_FN: &str = "upytest_execute_test";

/// Local holding the embedded script.
pub const SCRIPT_VAR: &str = "pystr";

/// Local holding the embedded expected output.
pub const EXPECTED_VAR: &str = "exp";

/// Extension of test scripts picked up by a directory scan.
pub const SCRIPT_EXTENSION: &str = "py";

/// Suffix appended to a script path to locate its expected output.
pub const EXPECTED_OUTPUT_SUFFIX: &str = ".exp";

/// Name of the test-case table for a group.
///
/// ## Examples
/// ```rust
/// use tinytest_core::harness::tests_table_name;
///
/// assert_eq!(tests_table_name(""), "_tests");
/// ```
pub fn tests_table_name(group: &str) -> String {
    format!("{group}{TESTS_TABLE_SUFFIX}")
}
