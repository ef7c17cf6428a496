//! Aggregate severity from per-CVE priorities.

use super::{EnrichmentError, EnrichmentStats, SecurityLookup};
use crate::model::{Bulletin, Severity};

/// Outcome of resolving the severity of one notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityOutcome {
    /// Aggregate severity
    pub severity: Severity,
    /// Lookups performed
    pub lookups: usize,
    /// Priorities that resolved to a known level
    pub signals: usize,
    /// Labels that were fetched but not recognized
    pub unrecognized: usize,
    /// Failed lookups, keyed by CVE id
    pub failures: Vec<(String, EnrichmentError)>,
}

impl SeverityOutcome {
    /// Record this outcome into run statistics
    pub fn record(&self, stats: &mut EnrichmentStats) {
        stats.cve_lookups += self.lookups;
        stats.cve_lookup_failures += self.failures.len();
        stats.unrecognized_priorities += self.unrecognized;
        stats
            .errors
            .extend(self.failures.iter().map(|(_, err)| err.clone()));
    }
}

/// Resolves a notice's severity as the maximum priority of its CVEs.
pub struct SeverityResolver<L> {
    lookup: L,
}

impl<L: SecurityLookup> SeverityResolver<L> {
    /// Create a resolver over the given lookup
    pub const fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Look up every CVE of the notice once and aggregate.
    ///
    /// Failed lookups and unrecognized labels contribute no signal; if no
    /// CVE resolves the result is [`Severity::Unknown`].
    pub fn resolve(&self, bulletin: &Bulletin) -> SeverityOutcome {
        let mut signals = Vec::with_capacity(bulletin.cve_ids.len());
        let mut unrecognized = 0;
        let mut failures = Vec::new();

        for cve_id in &bulletin.cve_ids {
            match self.lookup.fetch_cve_priority(cve_id) {
                Ok(label) => match Severity::from_priority_label(&label) {
                    Some(level) => {
                        tracing::debug!("{}: priority {}", cve_id, level);
                        signals.push(level);
                    }
                    None => {
                        tracing::debug!("{}: unrecognized priority {:?}", cve_id, label);
                        unrecognized += 1;
                    }
                },
                Err(err) => {
                    tracing::warn!("Failed to fetch priority for {}: {}", cve_id, err);
                    failures.push((cve_id.clone(), err));
                }
            }
        }

        SeverityOutcome {
            severity: Severity::max_of(signals.iter().copied()),
            lookups: bulletin.cve_ids.len(),
            signals: signals.len(),
            unrecognized,
            failures,
        }
    }

    /// Resolve and store the severity on the notice.
    ///
    /// A severity that was already set for this run is left untouched.
    pub fn apply(&self, bulletin: &mut Bulletin) -> SeverityOutcome {
        let outcome = self.resolve(bulletin);
        if !bulletin.severity.set(outcome.severity) {
            tracing::debug!("{}: severity already set", bulletin.display_id());
        }
        outcome
    }
}
