//! Lookup capability used by the enrichment resolvers.
//!
//! The resolvers never talk to the network themselves. They call a
//! [`SecurityLookup`], which lets the HTTP client be swapped for a
//! deterministic fake in tests or for [`NoOpLookup`] in offline runs.

use crate::enrichment::EnrichmentError;

/// External lookups needed to enrich a notice.
///
/// # Example
///
/// ```ignore
/// use usn_digest::enrichment::{NoOpLookup, SecurityLookup, UbuntuSecurityClient};
///
/// let lookup: Box<dyn SecurityLookup> = if offline {
///     Box::new(NoOpLookup)
/// } else {
///     Box::new(UbuntuSecurityClient::new(client_config)?)
/// };
/// ```
pub trait SecurityLookup: Send + Sync {
    /// Fetch the raw priority label (`Low`, `Medium`, `High`, `Critical`)
    /// assigned to a CVE.
    fn fetch_cve_priority(&self, cve_id: &str) -> Result<String, EnrichmentError>;

    /// Fetch the plain text of a notice's detail page.
    fn fetch_notice_detail(&self, notice_id: &str) -> Result<String, EnrichmentError>;

    /// Name of the data source, for log messages
    fn name(&self) -> &'static str;
}

impl<T: SecurityLookup + ?Sized> SecurityLookup for &T {
    fn fetch_cve_priority(&self, cve_id: &str) -> Result<String, EnrichmentError> {
        (**self).fetch_cve_priority(cve_id)
    }

    fn fetch_notice_detail(&self, notice_id: &str) -> Result<String, EnrichmentError> {
        (**self).fetch_notice_detail(notice_id)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: SecurityLookup + ?Sized> SecurityLookup for Box<T> {
    fn fetch_cve_priority(&self, cve_id: &str) -> Result<String, EnrichmentError> {
        (**self).fetch_cve_priority(cve_id)
    }

    fn fetch_notice_detail(&self, notice_id: &str) -> Result<String, EnrichmentError> {
        (**self).fetch_notice_detail(notice_id)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// A lookup that always fails with [`EnrichmentError::Disabled`].
///
/// Running the resolvers against it marks every notice as `Unknown`
/// without touching the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLookup;

impl NoOpLookup {
    /// Create a new no-op lookup.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SecurityLookup for NoOpLookup {
    fn fetch_cve_priority(&self, _cve_id: &str) -> Result<String, EnrichmentError> {
        Err(EnrichmentError::Disabled)
    }

    fn fetch_notice_detail(&self, _notice_id: &str) -> Result<String, EnrichmentError> {
        Err(EnrichmentError::Disabled)
    }

    fn name(&self) -> &'static str {
        "NoOp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_lookup_always_fails() {
        let lookup = NoOpLookup::new();
        assert_eq!(lookup.name(), "NoOp");
        assert_eq!(
            lookup.fetch_cve_priority("CVE-2024-1"),
            Err(EnrichmentError::Disabled)
        );
        assert_eq!(
            lookup.fetch_notice_detail("USN-1-1"),
            Err(EnrichmentError::Disabled)
        );
    }

    #[test]
    fn test_boxed_lookup_delegates() {
        let lookup: Box<dyn SecurityLookup> = Box::new(NoOpLookup);
        assert_eq!(lookup.name(), "NoOp");
        assert!(lookup.fetch_cve_priority("CVE-2024-1").is_err());
    }
}
