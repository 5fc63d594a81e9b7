#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(slug) = std::str::from_utf8(data) {
        // Fuzz slug lookups - these should never panic
        let _ = dignities::resolve_sign_name(slug);
        let _ = dignities::resolved_table().lookup(slug);
    }
});
