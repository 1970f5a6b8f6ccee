#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, and the cheap and full checks must agree.
        let valid = rnokpp::is_valid(s);
        let details = rnokpp::get_details(s);
        if details.is_valid {
            assert!(valid);
        }
        let _ = rnokpp::get_gender(s);
        let _ = rnokpp::parse(s);
    }
});
