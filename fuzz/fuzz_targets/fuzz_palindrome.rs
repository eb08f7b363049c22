#![no_main]

use libfuzzer_sys::fuzz_target;

use practice_core::palindrome::{check, normalize, Verdict};
use practice_core::MAX_LINE_BYTES;

fuzz_target!(|data: &[u8]| {
    let verdict = check(data);

    // Normalized text is its own normalization and gets the same verdict
    // when no bound or terminator applies.
    let normalized = normalize(data);
    assert_eq!(normalize(&normalized), normalized);
    assert!(normalized.is_ascii());
    if normalized.is_empty() {
        assert_eq!(verdict, Verdict::NothingToCheck);
    }
    if !data.contains(&b'\n') && data.len() <= MAX_LINE_BYTES {
        assert_eq!(check(&normalized), verdict);
    }
});
