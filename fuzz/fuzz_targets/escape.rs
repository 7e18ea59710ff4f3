#![no_main]

use libfuzzer_sys::fuzz_target;
use tinytest_core::{escape_bytes, unescape_literals};

fuzz_target!(|data: &[u8]| {
    // Arbitrary input must never panic the decoder
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = unescape_literals(s);
    }

    // Whatever the escaper accepts must decode back to the same text
    if let Ok(escaped) = escape_bytes(data) {
        let decoded = unescape_literals(&escaped).expect("escaped output must decode");
        assert_eq!(decoded.as_bytes(), data);
    }
});
