//! Escaping utilities for tabular output.
//!
//! Digest text is free-form and can carry tabs or line breaks that would
//! shift columns or split rows. Every field goes through [`escape_tsv`]
//! before it is written.

/// Sentinel written for fields that have no value
pub const NA: &str = "NA";

/// Replace each tab, carriage return and newline with a single space.
///
/// # Examples
///
/// ```
/// use usn_digest::reports::escape_tsv;
///
/// assert_eq!(escape_tsv("a\tb\nc"), "a b c");
/// assert_eq!(escape_tsv("plain"), "plain");
/// ```
#[must_use]
pub fn escape_tsv(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\t' | '\n' | '\r' => ' ',
            _ => c,
        })
        .collect()
}
