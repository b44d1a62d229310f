//! Fuzz target for the database URL parser.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_url_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // The parser should never panic, only return errors
        if let Ok(url) = dburl_core::parse(input) {
            assert!(!url.hosts().is_empty());
            let _ = url.to_connection_string();
        }
    }
});
