//! Enrichment stage.

use crate::config::EnrichmentConfig;
use crate::enrichment::{EnricherConfig, EnrichmentStats, NoOpLookup, NoticeEnricher, SecurityLookup};
use crate::error::Result;
use crate::model::Bulletin;

/// Build the lookup used for this run.
///
/// Disabled enrichment, or a build without the `enrichment` feature, gets
/// [`NoOpLookup`] so every enrichment field resolves to `Unknown`.
pub fn build_lookup(config: &EnrichmentConfig) -> Result<Box<dyn SecurityLookup>> {
    if !config.enabled {
        tracing::info!("Enrichment disabled; severity and status fields will be Unknown");
        return Ok(Box::new(NoOpLookup::new()));
    }

    #[cfg(feature = "enrichment")]
    {
        use crate::enrichment::{UbuntuClientConfig, UbuntuSecurityClient};

        let client = UbuntuSecurityClient::new(UbuntuClientConfig {
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
            ..UbuntuClientConfig::default()
        })?;
        Ok(Box::new(client))
    }

    #[cfg(not(feature = "enrichment"))]
    {
        tracing::warn!("Built without the enrichment feature; skipping lookups");
        Ok(Box::new(NoOpLookup::new()))
    }
}

/// Enrich the filtered notices in place
pub fn enrich_notices<L: SecurityLookup>(
    notices: &mut [Bulletin],
    lookup: L,
    config: &EnrichmentConfig,
) -> EnrichmentStats {
    let enricher = NoticeEnricher::new(
        lookup,
        EnricherConfig {
            max_concurrent: config.max_concurrent.max(1),
        },
    );
    enricher.enrich(notices)
}
