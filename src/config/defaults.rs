//! Default configuration values for usn-digest.

/// Release labels a notice must carry to be reported
pub const DEFAULT_TARGET_RELEASES: &[&str] = &["24.04", "24.04 LTS"];

/// Base URL of the Ubuntu security pages
pub const DEFAULT_SECURITY_BASE_URL: &str = "https://ubuntu.com/security";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Notices enriched concurrently
pub const DEFAULT_MAX_CONCURRENT: usize = 1;

/// Upper bound accepted for `enrichment.max_concurrent`
pub const MAX_CONCURRENT_LIMIT: usize = 32;

/// Upper bound accepted for `enrichment.timeout_secs`
pub const MAX_TIMEOUT_SECS: u64 = 300;

pub(crate) fn default_target_releases() -> Vec<String> {
    DEFAULT_TARGET_RELEASES
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}
