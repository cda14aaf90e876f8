#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Every input must end in a program or classified errors, never a panic.
        if let Err(errors) = enforest::parse_source(s) {
            assert!(!errors.is_empty());
        }
    }
});
