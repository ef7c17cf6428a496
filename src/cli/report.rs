//! Report command handler.
//!
//! Implements the `report` subcommand: parse a digest, keep the notices
//! that apply to the target releases, enrich them and print the report.

use crate::config::{AppConfig, Validatable};
use crate::error::DigestError;
use crate::pipeline::{
    build_lookup, exit_codes, output_report, process_notices, read_digest, OutputTarget,
};
use anyhow::{Context, Result};
use std::path::Path;

/// Run the report command
pub fn run_report(input: &Path, config: &AppConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(DigestError::config(message).into());
    }

    let bulletins = read_digest(input)?;
    let lookup = build_lookup(&config.enrichment).context("failed to set up enrichment")?;
    let outcome = process_notices(bulletins, config, lookup);

    tracing::info!(
        "{} of {} notices apply to {}",
        outcome.notices.len(),
        outcome.parsed,
        config.filter.target_releases.join(", ")
    );
    if outcome.stats.has_errors() {
        tracing::warn!(
            "{} lookups failed; affected fields are reported as Unknown",
            outcome.stats.failures()
        );
    }

    let target = OutputTarget::from_option(config.output.file.clone());
    output_report(&outcome.notices, config.output.format, &target)?;

    Ok(exit_codes::SUCCESS)
}
