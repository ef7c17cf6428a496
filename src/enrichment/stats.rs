//! Enrichment statistics and lookup error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Statistics from an enrichment run.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct EnrichmentStats {
    /// Number of notices processed
    pub notices_enriched: usize,
    /// Number of CVE priority lookups attempted
    pub cve_lookups: usize,
    /// Number of CVE priority lookups that failed
    pub cve_lookup_failures: usize,
    /// Number of priority labels that were fetched but not recognized
    pub unrecognized_priorities: usize,
    /// Number of notice detail pages that could not be fetched
    pub detail_failures: usize,
    /// Duration of the enrichment operation
    #[serde(with = "duration_serde")]
    pub duration: Duration,
    /// Errors encountered during enrichment
    pub errors: Vec<EnrichmentError>,
}

impl EnrichmentStats {
    /// Create new empty stats
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of external calls that failed
    #[must_use]
    pub const fn failures(&self) -> usize {
        self.cve_lookup_failures + self.detail_failures
    }

    /// Log a summary of the enrichment operation
    pub fn log_summary(&self) {
        tracing::info!(
            "Enrichment complete: {} notices, {} CVE lookups ({} failed, {} unrecognized), \
             {} detail pages failed in {:?}",
            self.notices_enriched,
            self.cve_lookups,
            self.cve_lookup_failures,
            self.unrecognized_priorities,
            self.detail_failures,
            self.duration
        );
    }

    /// Check if there were any errors
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Merge stats from another enrichment operation
    pub fn merge(&mut self, other: &Self) {
        self.notices_enriched += other.notices_enriched;
        self.cve_lookups += other.cve_lookups;
        self.cve_lookup_failures += other.cve_lookup_failures;
        self.unrecognized_priorities += other.unrecognized_priorities;
        self.detail_failures += other.detail_failures;
        self.duration += other.duration;
        self.errors.extend(other.errors.iter().cloned());
    }
}

/// Errors returned by a single external lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrichmentError {
    /// Request failed or returned a non-success status
    ApiError(String),
    /// Response did not contain the expected data
    ParseError(String),
    /// Request exceeded the configured timeout
    Timeout,
    /// Notice has no id to look up
    MissingIdentifier,
    /// Lookups are disabled for this run
    Disabled,
}

impl fmt::Display for EnrichmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiError(msg) => write!(f, "API error: {msg}"),
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::Timeout => write!(f, "Request timeout"),
            Self::MissingIdentifier => write!(f, "Notice has no identifier"),
            Self::Disabled => write!(f, "Lookups disabled"),
        }
    }
}

impl std::error::Error for EnrichmentError {}

/// Serde support for Duration
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
