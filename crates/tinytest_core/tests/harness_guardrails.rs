use tinytest_core::harness;
use tinytest_core::{escape_str, is_c_identifier, test_function_ident};

#[test]
fn harness_names_are_c_identifiers() {
    for name in [
        harness::TESTCASE_STRUCT,
        harness::TESTGROUP_STRUCT,
        harness::GROUPS_TABLE,
        harness::TESTS_TABLE_SUFFIX,
        harness::END_OF_TESTCASES,
        harness::END_OF_GROUPS,
        harness::TT_ENABLED,
        harness::SET_EXPECTED_OUTPUT_FN,
        harness::EXECUTE_TEST_FN,
        harness::SCRIPT_VAR,
        harness::EXPECTED_VAR,
    ] {
        assert!(is_c_identifier(name), "harness name is not a C identifier: {name:?}");
    }
}

#[test]
fn unnamed_group_table_is_valid() {
    assert!(is_c_identifier(&harness::tests_table_name("")));
}

#[test]
fn identifiers_for_upstream_layout_are_valid() {
    for path in [
        "basics/0prelim.py",
        "basics/string-format.py",
        "float/float2int_doubleprec_intbig.py",
        "micropython/heapalloc_exc_compressed_emg_exc.py",
        "thread/thread_ident1.py",
    ] {
        let ident = test_function_ident(path);
        assert!(is_c_identifier(&ident), "{path} -> {ident}");
    }
}

#[test]
fn every_escaped_line_is_one_literal() {
    let text = "a \"quoted\" line\n\ttabbed\\line\r\n\0\n";
    for line in escape_str(text).lines() {
        assert!(line.starts_with('"') && line.ends_with('"'), "line is not a literal: {line:?}");
        let body = &line[1..line.len() - 1];
        let mut escaped = false;
        for ch in body.chars() {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else {
                assert_ne!(ch, '"', "unescaped quote in {line:?}");
            }
        }
        assert!(!escaped, "dangling backslash in {line:?}");
    }
}
