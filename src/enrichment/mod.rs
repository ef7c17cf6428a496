//! Notice enrichment from the Ubuntu security website.
//!
//! Each notice that survives filtering gets three extra facts: an aggregate
//! severity derived from the priorities of its CVEs, whether Canonical
//! Livepatch covers it, and whether a reboot is required. Every fact is
//! written once per run, and any lookup failure degrades to `Unknown`
//! rather than aborting the run.
//!
//! # Example
//!
//! ```
//! use usn_digest::enrichment::{EnricherConfig, NoOpLookup, NoticeEnricher};
//! use usn_digest::model::{Availability, Bulletin, Severity};
//!
//! let mut notices = vec![Bulletin::new(Some("USN-1-1".into()), Some("Linux kernel".into()))];
//! let enricher = NoticeEnricher::new(NoOpLookup, EnricherConfig::default());
//! let stats = enricher.enrich(&mut notices);
//!
//! assert_eq!(stats.notices_enriched, 1);
//! assert_eq!(notices[0].severity.get(), Some(&Severity::Unknown));
//! assert_eq!(notices[0].livepatch.get(), Some(&Availability::Unknown));
//! ```

#[cfg(feature = "enrichment")]
mod client;
mod detail;
mod severity;
mod stats;
mod traits;

#[cfg(feature = "enrichment")]
pub use client::{
    extract_body_text, extract_priority, UbuntuClientConfig, UbuntuSecurityClient,
    UBUNTU_SECURITY_URL,
};
pub use detail::{livepatch_status, reboot_status, DetailOutcome, DetailResolver};
pub use severity::{SeverityOutcome, SeverityResolver};
pub use stats::{EnrichmentError, EnrichmentStats};
pub use traits::{NoOpLookup, SecurityLookup};

use crate::model::Bulletin;
use rayon::prelude::*;
use std::time::Instant;

/// Settings for an enrichment run
#[derive(Debug, Clone)]
pub struct EnricherConfig {
    /// Number of notices enriched concurrently (1 = sequential)
    pub max_concurrent: usize,
}

impl Default for EnricherConfig {
    fn default() -> Self {
        Self { max_concurrent: 1 }
    }
}

/// Drives severity and detail resolution over a batch of notices.
pub struct NoticeEnricher<L> {
    lookup: L,
    config: EnricherConfig,
}

impl<L: SecurityLookup> NoticeEnricher<L> {
    /// Create an enricher over the given lookup
    pub const fn new(lookup: L, config: EnricherConfig) -> Self {
        Self { lookup, config }
    }

    /// Name of the underlying data source
    pub fn source_name(&self) -> &'static str {
        self.lookup.name()
    }

    /// Enrich a single notice and return its statistics
    pub fn enrich_one(&self, bulletin: &mut Bulletin) -> EnrichmentStats {
        let mut stats = EnrichmentStats::new();

        SeverityResolver::new(&self.lookup)
            .apply(bulletin)
            .record(&mut stats);
        DetailResolver::new(&self.lookup)
            .apply(bulletin)
            .record(&mut stats);

        stats.notices_enriched = 1;
        tracing::debug!(
            "{}: severity {}, livepatch {}, reboot {}",
            bulletin.display_id(),
            bulletin.severity.get().copied().unwrap_or_default(),
            bulletin.livepatch.get().copied().unwrap_or_default(),
            bulletin.reboot_required.get().copied().unwrap_or_default()
        );
        stats
    }

    /// Enrich all notices in place.
    ///
    /// Order of the slice is preserved. With `max_concurrent > 1` the notices
    /// are processed on a dedicated thread pool of that size.
    pub fn enrich(&self, bulletins: &mut [Bulletin]) -> EnrichmentStats {
        let start = Instant::now();
        tracing::info!(
            "Enriching {} notices from {}",
            bulletins.len(),
            self.lookup.name()
        );

        let mut stats = if self.config.max_concurrent > 1 {
            self.enrich_parallel(bulletins)
        } else {
            self.enrich_sequential(bulletins)
        };

        stats.duration = start.elapsed();
        stats.log_summary();
        stats
    }

    fn enrich_sequential(&self, bulletins: &mut [Bulletin]) -> EnrichmentStats {
        let mut stats = EnrichmentStats::new();
        for bulletin in bulletins.iter_mut() {
            stats.merge(&self.enrich_one(bulletin));
        }
        stats
    }

    fn enrich_parallel(&self, bulletins: &mut [Bulletin]) -> EnrichmentStats {
        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.max_concurrent)
            .build()
        {
            Ok(pool) => pool,
            Err(e) => {
                tracing::warn!("Failed to build thread pool, enriching sequentially: {}", e);
                return self.enrich_sequential(bulletins);
            }
        };

        pool.install(|| {
            bulletins
                .par_iter_mut()
                .map(|bulletin| self.enrich_one(bulletin))
                .reduce(EnrichmentStats::new, |mut acc, part| {
                    acc.merge(&part);
                    acc
                })
        })
    }
}
