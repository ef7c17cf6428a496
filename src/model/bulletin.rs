//! The parsed security notice record.

use super::{Availability, SetOnce, Severity};
use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// One Ubuntu Security Notice reconstructed from a digest.
///
/// Header fields and accumulated text are fixed once the parser finalizes
/// the record. The three enrichment slots start unset and are filled at most
/// once, after filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bulletin {
    /// Notice identifier, e.g. `USN-7513-1`
    pub id: Option<String>,
    /// Title from the header line
    pub title: Option<String>,
    /// Publication date (first long-form date in the notice)
    pub published_date: SetOnce<NaiveDate>,
    /// Text of the `Summary:` section
    pub summary: Option<String>,
    /// Text of the `Details:` section
    pub description: Option<String>,
    /// Text of the `Update instructions:` section
    pub update_instructions: Option<String>,
    /// First `- package: description` line
    pub software_description: SetOnce<String>,
    /// Referenced CVE ids in first-seen order
    pub cve_ids: IndexSet<String>,
    /// Affected Ubuntu releases in first-seen order
    pub release_tags: IndexSet<String>,
    /// Maximum CVE priority
    pub severity: SetOnce<Severity>,
    /// Whether Canonical Livepatch covers this notice
    pub livepatch: SetOnce<Availability>,
    /// Whether applying the update requires a reboot
    pub reboot_required: SetOnce<Availability>,
}

impl Bulletin {
    /// Create a record from parsed header fields
    #[must_use]
    pub fn new(id: Option<String>, title: Option<String>) -> Self {
        Self {
            id,
            title,
            ..Self::default()
        }
    }

    /// Record a CVE id; returns `false` if it was already present
    pub fn add_cve(&mut self, cve_id: impl Into<String>) -> bool {
        self.cve_ids.insert(cve_id.into())
    }

    /// Record a release tag; returns `false` if it was already present
    pub fn add_release(&mut self, release: impl Into<String>) -> bool {
        self.release_tags.insert(release.into())
    }

    /// Identifier for log messages
    #[must_use]
    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or("<no id>")
    }

    /// Whether all enrichment slots have been populated
    #[must_use]
    pub const fn is_enriched(&self) -> bool {
        self.severity.is_set() && self.livepatch.is_set() && self.reboot_required.is_set()
    }
}
