//! Report generation for enriched notices.
//!
//! Two output formats are supported:
//! - TSV: one flattened row per notice, the default
//! - JSON: the full record list, for programmatic integration

mod escape;
mod json;
mod tsv;
mod types;

pub use escape::{escape_tsv, NA};
pub use json::JsonReporter;
pub use tsv::{TsvReporter, TSV_HEADER};
pub use types::ReportFormat;

use crate::model::Bulletin;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the notices as a complete report
    fn generate(&self, bulletins: &[Bulletin]) -> Result<String, ReportError>;

    /// Write the report to a writer
    fn write_report(
        &self,
        bulletins: &[Bulletin],
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(bulletins)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Tsv => Box::new(TsvReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
