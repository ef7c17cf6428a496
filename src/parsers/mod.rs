//! Security notice digest parsing.
//!
//! A digest is the plain-text concatenation of `ubuntu-security-announce`
//! messages. Each `Subject: [USN-XXXX-Y] Title` line starts a new notice;
//! section markers (`Summary:`, `Details:`, `Update instructions:`, ...)
//! decide which text buffer the following lines feed, and a set of
//! independent extractors pick dates, releases, CVE ids and the software
//! description out of every line.
//!
//! ```
//! use usn_digest::parsers::parse_digest_str;
//!
//! let notices = parse_digest_str("Subject: [USN-1-1] Example\nCVE-2024-1\n");
//! assert_eq!(notices.len(), 1);
//! assert!(notices[0].cve_ids.contains("CVE-2024-1"));
//! ```

mod digest;
pub mod extractors;

pub use digest::{parse_digest_reader, parse_digest_str, DigestParser, Section};
