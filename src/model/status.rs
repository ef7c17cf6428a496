//! Enrichment outcome types: aggregate severity and yes/no/unknown flags.

use serde::{Deserialize, Serialize};

/// Aggregate severity of a notice, derived from its CVE priorities.
///
/// Variant order is the severity order; `Unknown` means no CVE priority
/// could be resolved and is never compared against the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    #[default]
    Unknown,
}

impl Severity {
    /// Parse an Ubuntu priority label, case-insensitively.
    ///
    /// Returns `None` for labels that carry no severity signal
    /// (including "unknown" and "negligible").
    #[must_use]
    pub fn from_priority_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    /// Ordinal rank, 1 (low) to 4 (critical); 0 for unknown
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
            Self::Unknown => 0,
        }
    }

    /// Highest severity among `signals`, or `Unknown` if there are none.
    pub fn max_of(signals: impl IntoIterator<Item = Self>) -> Self {
        signals
            .into_iter()
            .filter(|s| *s != Self::Unknown)
            .max_by_key(|s| s.rank())
            .unwrap_or(Self::Unknown)
    }

    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tri-state flag used for livepatch availability and reboot requirement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Yes,
    No,
    #[default]
    Unknown,
}

impl Availability {
    /// Label used in JSON output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
