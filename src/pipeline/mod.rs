//! Pipeline orchestration for digest processing.
//!
//! Shared parse → filter → enrich → report logic used by the `report`
//! command and by integration tests.

mod enrich;
mod output;
mod parse;
mod report_stage;

pub use enrich::{build_lookup, enrich_notices};
pub use output::{write_output, OutputTarget};
pub use parse::read_digest;
pub use report_stage::output_report;

use crate::config::AppConfig;
use crate::enrichment::{EnrichmentStats, SecurityLookup};
use crate::filter::NoticeFilter;
use crate::model::Bulletin;

/// Result of filtering and enriching one digest
#[derive(Debug, Clone)]
pub struct DigestOutcome {
    /// Surviving notices, enriched, in input order
    pub notices: Vec<Bulletin>,
    /// Number of notices parsed from the input
    pub parsed: usize,
    /// Enrichment statistics
    pub stats: EnrichmentStats,
}

impl DigestOutcome {
    /// Number of notices removed by the filter
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.parsed - self.notices.len()
    }
}

/// Filter parsed notices and enrich the survivors.
pub fn process_notices<L: SecurityLookup>(
    bulletins: Vec<Bulletin>,
    config: &AppConfig,
    lookup: L,
) -> DigestOutcome {
    let parsed = bulletins.len();
    let mut notices = NoticeFilter::from_config(&config.filter).apply(bulletins);
    let stats = enrich_notices(&mut notices, lookup, &config.enrichment);

    DigestOutcome {
        notices,
        parsed,
        stats,
    }
}

/// Exit codes for scripting
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
