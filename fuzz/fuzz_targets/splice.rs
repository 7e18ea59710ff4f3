#![no_main]

use libfuzzer_sys::fuzz_target;
use tinytest_core::{contains_helper_import, splice_helper};

fuzz_target!(|data: (&str, &str)| {
    let (script, helper) = data;
    let spliced = splice_helper(script, helper);
    if contains_helper_import(script) {
        assert!(spliced.contains("class skip_if:\n"));
    } else {
        assert_eq!(spliced, script);
    }
});
