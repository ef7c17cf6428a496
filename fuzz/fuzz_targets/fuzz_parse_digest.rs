#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the digest parser.
///
/// Feeds arbitrary bytes through the reader entry point, which replaces
/// invalid UTF-8, so every line reaches the extractors and section logic.
fuzz_target!(|data: &[u8]| {
    let _ = usn_digest::parse_digest_reader(data);
});
