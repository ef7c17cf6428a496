//! Livepatch and reboot status from the notice detail page.

use super::{EnrichmentError, EnrichmentStats, SecurityLookup};
use crate::model::{Availability, Bulletin};

const LIVEPATCH_PHRASE: &str = "canonical livepatch is available";
const KERNEL_TITLE_PHRASE: &str = "linux kernel";
const REBOOT_PHRASES: [&str; 2] = ["a reboot is required", "you need to reboot your computer"];

/// Outcome of resolving the detail fields of one notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailOutcome {
    pub livepatch: Availability,
    pub reboot_required: Availability,
    /// Set when the detail page could not be obtained
    pub error: Option<EnrichmentError>,
}

impl DetailOutcome {
    /// Both fields unknown because the page was unavailable
    #[must_use]
    pub const fn failed(error: EnrichmentError) -> Self {
        Self {
            livepatch: Availability::Unknown,
            reboot_required: Availability::Unknown,
            error: Some(error),
        }
    }

    /// Record this outcome into run statistics
    pub fn record(&self, stats: &mut EnrichmentStats) {
        if let Some(err) = &self.error {
            stats.detail_failures += 1;
            stats.errors.push(err.clone());
        }
    }
}

/// Livepatch availability from page text, falling back to the title.
///
/// Both inputs are compared case-insensitively.
#[must_use]
pub fn livepatch_status(page_text: &str, title: Option<&str>) -> Availability {
    if page_text.to_lowercase().contains(LIVEPATCH_PHRASE) {
        Availability::Yes
    } else if title.is_some_and(|t| t.to_lowercase().contains(KERNEL_TITLE_PHRASE)) {
        Availability::No
    } else {
        Availability::Unknown
    }
}

/// Whether the page text says a reboot is needed
#[must_use]
pub fn reboot_status(page_text: &str) -> Availability {
    let text = page_text.to_lowercase();
    if REBOOT_PHRASES.iter().any(|phrase| text.contains(phrase)) {
        Availability::Yes
    } else {
        Availability::No
    }
}

/// Resolves livepatch and reboot status with one detail-page lookup.
pub struct DetailResolver<L> {
    lookup: L,
}

impl<L: SecurityLookup> DetailResolver<L> {
    /// Create a resolver over the given lookup
    pub const fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Fetch the detail page and derive both fields.
    ///
    /// Any failure, including a notice without an id, degrades both fields
    /// to [`Availability::Unknown`].
    pub fn resolve(&self, bulletin: &Bulletin) -> DetailOutcome {
        let Some(id) = bulletin.id.as_deref() else {
            tracing::warn!("Skipping detail lookup for notice without id");
            return DetailOutcome::failed(EnrichmentError::MissingIdentifier);
        };

        match self.lookup.fetch_notice_detail(id) {
            Ok(page_text) => DetailOutcome {
                livepatch: livepatch_status(&page_text, bulletin.title.as_deref()),
                reboot_required: reboot_status(&page_text),
                error: None,
            },
            Err(err) => {
                tracing::warn!("Failed to fetch detail page for {}: {}", id, err);
                DetailOutcome::failed(err)
            }
        }
    }

    /// Resolve and store both fields on the notice (first write wins)
    pub fn apply(&self, bulletin: &mut Bulletin) -> DetailOutcome {
        let outcome = self.resolve(bulletin);
        bulletin.livepatch.set(outcome.livepatch);
        bulletin.reboot_required.set(outcome.reboot_required);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePages(Result<&'static str, EnrichmentError>);

    impl SecurityLookup for FakePages {
        fn fetch_cve_priority(&self, _cve_id: &str) -> Result<String, EnrichmentError> {
            Err(EnrichmentError::Disabled)
        }

        fn fetch_notice_detail(&self, _notice_id: &str) -> Result<String, EnrichmentError> {
            self.0.clone().map(ToString::to_string)
        }

        fn name(&self) -> &'static str {
            "fake"
        }
    }

    fn kernel_notice() -> Bulletin {
        Bulletin::new(
            Some("USN-7513-1".into()),
            Some("Linux kernel vulnerabilities".into()),
        )
    }

    #[test]
    fn test_livepatch_available() {
        let page = "Update instructions ... Canonical Livepatch is available for this kernel.";
        assert_eq!(livepatch_status(page, None), Availability::Yes);
    }

    #[test]
    fn test_livepatch_falls_back_to_title() {
        assert_eq!(
            livepatch_status("nothing here", Some("LINUX KERNEL vulnerabilities")),
            Availability::No
        );
        assert_eq!(
            livepatch_status("nothing here", Some("OpenSSL vulnerability")),
            Availability::Unknown
        );
        assert_eq!(livepatch_status("nothing here", None), Availability::Unknown);
    }

    #[test]
    fn test_reboot_phrases() {
        assert_eq!(
            reboot_status("After a standard system update you need to reboot your computer"),
            Availability::Yes
        );
        assert_eq!(reboot_status("A reboot is required."), Availability::Yes);
        assert_eq!(reboot_status("In general, a standard system update"), Availability::No);
    }

    #[test]
    fn test_resolve_success() {
        let resolver = DetailResolver::new(FakePages(Ok(
            "Canonical Livepatch is available. A reboot is required.",
        )));
        let mut bulletin = kernel_notice();
        let outcome = resolver.apply(&mut bulletin);
        assert_eq!(outcome.error, None);
        assert_eq!(bulletin.livepatch.get(), Some(&Availability::Yes));
        assert_eq!(bulletin.reboot_required.get(), Some(&Availability::Yes));
    }

    #[test]
    fn test_resolve_failure_sets_unknown() {
        let resolver = DetailResolver::new(FakePages(Err(EnrichmentError::Timeout)));
        let mut bulletin = kernel_notice();
        let outcome = resolver.apply(&mut bulletin);
        assert_eq!(outcome.error, Some(EnrichmentError::Timeout));
        assert_eq!(bulletin.livepatch.get(), Some(&Availability::Unknown));
        assert_eq!(bulletin.reboot_required.get(), Some(&Availability::Unknown));

        let mut stats = EnrichmentStats::new();
        outcome.record(&mut stats);
        assert_eq!(stats.detail_failures, 1);
    }

    #[test]
    fn test_missing_id_is_failure() {
        let resolver = DetailResolver::new(FakePages(Ok("a reboot is required")));
        let outcome = resolver.resolve(&Bulletin::default());
        assert_eq!(outcome, DetailOutcome::failed(EnrichmentError::MissingIdentifier));
    }
}
