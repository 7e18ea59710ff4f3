//! The three kinds of generated C blocks.
//!
//! Each block is a small value built from [`TestRecord`]s and rendered through [`CEmitter`], so
//! braces, separators and table terminators are produced in one place.

use tinytest_core::harness::{
    END_OF_GROUPS, END_OF_TESTCASES, EXECUTE_TEST_FN, EXPECTED_VAR, GROUPS_TABLE, SCRIPT_VAR,
    SET_EXPECTED_OUTPUT_FN, TESTCASE_STRUCT, TESTGROUP_STRUCT, TT_ENABLED, tests_table_name,
};

use super::TestRecord;
use super::c_emitter::{CEmitter, quoted};

/// Per-test function: embeds the script and expected output, then hands both to the harness.
#[derive(Debug, Clone, Copy)]
pub struct TestFunction<'a> {
    record: &'a TestRecord,
}

impl<'a> TestFunction<'a> {
    pub fn new(record: &'a TestRecord) -> Self {
        Self { record }
    }

    pub fn render(&self) -> String {
        let expected_len = format!("sizeof({EXPECTED_VAR}) - 1");
        let mut e = CEmitter::new();
        e.function("void", &self.record.name, "void* data", |e| {
            e.static_string(SCRIPT_VAR, &self.record.script);
            e.static_string(EXPECTED_VAR, &self.record.output);
            e.call("printf", &[r#""\n""#]);
            e.call(SET_EXPECTED_OUTPUT_FN, &[EXPECTED_VAR, expected_len.as_str()]);
            e.call(EXECUTE_TEST_FN, &[SCRIPT_VAR]);
            e.call("printf", &[r#""result: ""#]);
        });
        e.finish()
    }
}

/// One row of a test-case table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCaseEntry<'a> {
    /// Shown by the harness; a test path, so it never needs escaping
    pub description: &'a str,
    pub function: &'a str,
    pub flags: &'a str,
}

impl<'a> From<&'a TestRecord> for TestCaseEntry<'a> {
    fn from(record: &'a TestRecord) -> Self {
        Self {
            description: &record.description,
            function: &record.name,
            flags: TT_ENABLED,
        }
    }
}

/// `struct testcase_t <group>_tests[]`, closed by `END_OF_TESTCASES`.
#[derive(Debug, Clone)]
pub struct TestCaseTable<'a> {
    group: &'a str,
    entries: Vec<TestCaseEntry<'a>>,
}

impl<'a> TestCaseTable<'a> {
    pub fn new(group: &'a str, records: &'a [TestRecord]) -> Self {
        Self {
            group,
            entries: records.iter().map(TestCaseEntry::from).collect(),
        }
    }

    pub fn render(&self) -> String {
        let mut e = CEmitter::new();
        let declaration = format!("struct {TESTCASE_STRUCT} {}[]", tests_table_name(self.group));
        e.initializer(&declaration, |e| {
            for entry in &self.entries {
                let description = quoted(entry.description);
                // setup and setup-data slots are unused
                e.aggregate_entry(&[description.as_str(), entry.function, entry.flags, "0", "0"]);
            }
            e.line(END_OF_TESTCASES);
        });
        e.finish()
    }
}

/// `struct testgroup_t groups[]`, closed by `END_OF_GROUPS`.
#[derive(Debug, Clone)]
pub struct TestGroupTable<'a> {
    groups: Vec<&'a str>,
}

impl<'a> TestGroupTable<'a> {
    pub fn new(groups: Vec<&'a str>) -> Self {
        Self { groups }
    }

    pub fn render(&self) -> String {
        let mut e = CEmitter::new();
        e.initializer(&format!("struct {TESTGROUP_STRUCT} {GROUPS_TABLE}[]"), |e| {
            for group in &self.groups {
                let name = quoted(group);
                let table = tests_table_name(group);
                e.aggregate_entry(&[name.as_str(), table.as_str()]);
            }
            e.line(END_OF_GROUPS);
        });
        e.finish()
    }
}
