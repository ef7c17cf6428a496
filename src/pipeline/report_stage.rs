//! Report output stage.

use super::output::{write_output, OutputTarget};
use crate::error::Result;
use crate::model::Bulletin;
use crate::reports::{create_reporter, ReportFormat};

/// Render the notices in `format` and write them to `target`.
///
/// An empty list still produces the TSV header or `[]`.
pub fn output_report(
    notices: &[Bulletin],
    format: ReportFormat,
    target: &OutputTarget,
) -> Result<()> {
    let reporter = create_reporter(format);
    let content = reporter.generate(notices)?;
    tracing::debug!("Generated {} report for {} notices", format, notices.len());
    write_output(&content, target)
}
