//! Applicability and variant filters.
//!
//! A notice is kept when it names one of the target releases and its title
//! does not carry a platform-variant marker. The marker list is fixed: only
//! generic builds are reported.

use crate::config::FilterConfig;
use crate::model::Bulletin;

/// Title markers of platform-specific variants that are never reported
pub const EXCLUDED_VARIANT_MARKERS: &[&str] = &[
    "(GKE)",
    "(AWS)",
    "(Azure)",
    "(NVIDIA)",
    "(Real-time)",
    "(OEM)",
    "(Raspberry Pi)",
];

/// Why a notice was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No target release in the release tags
    NotApplicable,
    /// Title carries the given variant marker
    Variant(&'static str),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotApplicable => write!(f, "no target release"),
            Self::Variant(marker) => write!(f, "variant {marker}"),
        }
    }
}

/// Filter pipeline over parsed notices
#[derive(Debug, Clone)]
pub struct NoticeFilter {
    target_releases: Vec<String>,
}

impl NoticeFilter {
    /// Create a filter accepting the given release labels (exact match)
    pub fn new<I, S>(target_releases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            target_releases: target_releases.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a filter from configuration
    #[must_use]
    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.target_releases.iter().cloned())
    }

    /// Release labels this filter accepts
    #[must_use]
    pub fn target_releases(&self) -> &[String] {
        &self.target_releases
    }

    /// Whether the notice names one of the target releases
    #[must_use]
    pub fn applies_to_target(&self, bulletin: &Bulletin) -> bool {
        bulletin
            .release_tags
            .iter()
            .any(|tag| self.target_releases.iter().any(|target| target == tag))
    }

    /// The first variant marker found in the title, if any
    #[must_use]
    pub fn variant_marker(bulletin: &Bulletin) -> Option<&'static str> {
        let title = bulletin.title.as_deref().unwrap_or_default();
        EXCLUDED_VARIANT_MARKERS
            .iter()
            .copied()
            .find(|marker| title.contains(marker))
    }

    /// Check both predicates, applicability first
    pub fn check(&self, bulletin: &Bulletin) -> Result<(), Rejection> {
        if !self.applies_to_target(bulletin) {
            return Err(Rejection::NotApplicable);
        }
        if let Some(marker) = Self::variant_marker(bulletin) {
            return Err(Rejection::Variant(marker));
        }
        Ok(())
    }

    /// Keep the notices that pass both predicates, preserving order
    #[must_use]
    pub fn apply(&self, bulletins: Vec<Bulletin>) -> Vec<Bulletin> {
        let total = bulletins.len();
        let kept: Vec<Bulletin> = bulletins
            .into_iter()
            .filter(|bulletin| match self.check(bulletin) {
                Ok(()) => true,
                Err(reason) => {
                    tracing::debug!("Dropping {}: {}", bulletin.display_id(), reason);
                    false
                }
            })
            .collect();

        tracing::info!(
            "Filtered to {} notices (removed {})",
            kept.len(),
            total - kept.len()
        );
        kept
    }
}

impl Default for NoticeFilter {
    fn default() -> Self {
        Self::from_config(&FilterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(id: &str, title: &str, releases: &[&str]) -> Bulletin {
        let mut bulletin = Bulletin::new(Some(id.into()), Some(title.into()));
        for release in releases {
            bulletin.add_release(*release);
        }
        bulletin
    }

    #[test]
    fn test_release_mismatch_dropped() {
        let filter = NoticeFilter::new(["24.04"]);
        let kept = filter.apply(vec![notice("USN-1-1", "Linux kernel", &["22.04"])]);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_release_match_is_exact() {
        let filter = NoticeFilter::new(["24.04"]);
        assert!(!filter.applies_to_target(&notice("USN-1-1", "t", &["24.04 LTS"])));
        assert!(filter.applies_to_target(&notice("USN-1-1", "t", &["22.04", "24.04"])));
    }

    #[test]
    fn test_default_accepts_both_forms() {
        let filter = NoticeFilter::default();
        assert!(filter.applies_to_target(&notice("USN-1-1", "t", &["24.04"])));
        assert!(filter.applies_to_target(&notice("USN-1-1", "t", &["24.04 LTS"])));
    }

    #[test]
    fn test_variant_dropped_even_when_release_matches() {
        let filter = NoticeFilter::default();
        let oem = notice("USN-2-1", "Linux kernel (OEM) vulnerabilities", &["24.04"]);
        assert_eq!(filter.check(&oem), Err(Rejection::Variant("(OEM)")));
        assert!(filter.apply(vec![oem]).is_empty());
    }

    #[test]
    fn test_variant_match_is_case_sensitive() {
        let bulletin = notice("USN-3-1", "Linux kernel (oem) vulnerabilities", &["24.04"]);
        assert_eq!(NoticeFilter::variant_marker(&bulletin), None);
    }

    #[test]
    fn test_order_preserved() {
        let filter = NoticeFilter::default();
        let kept = filter.apply(vec![
            notice("USN-1-1", "A", &["24.04"]),
            notice("USN-2-1", "B", &["20.04"]),
            notice("USN-3-1", "C (AWS)", &["24.04"]),
            notice("USN-4-1", "D", &["24.04 LTS"]),
        ]);
        let ids: Vec<_> = kept.iter().map(|b| b.display_id()).collect();
        assert_eq!(ids, ["USN-1-1", "USN-4-1"]);
    }

    #[test]
    fn test_missing_title_is_not_a_variant() {
        let mut bulletin = Bulletin::new(None, None);
        bulletin.add_release("24.04");
        assert_eq!(NoticeFilter::default().check(&bulletin), Ok(()));
    }
}
