//! TSV report generator.
//!
//! Flattens each notice to the seven columns in [`TSV_HEADER`]. Unset
//! fields are written as [`NA`]; an unresolved severity is printed as
//! `Unknown`, while unresolved livepatch and reboot flags become `NA`.

use super::escape::{escape_tsv, NA};
use super::{ReportError, ReportFormat, ReportGenerator};
use crate::model::{Availability, Bulletin};
use std::fmt::Write as _;

/// Column header row
pub const TSV_HEADER: &str = "id\ttitle\tpublished_date\tsummary\tseverity\treboot\tlivepatch";

/// TSV report generator.
pub struct TsvReporter;

impl TsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn text_or_na(value: Option<&str>) -> String {
    value.map_or_else(|| NA.to_string(), escape_tsv)
}

fn flag_or_na(value: Option<&Availability>) -> &'static str {
    match value {
        Some(Availability::Yes) => "yes",
        Some(Availability::No) => "no",
        Some(Availability::Unknown) | None => NA,
    }
}

/// Render one notice as a row, without the trailing newline
fn format_row(bulletin: &Bulletin) -> String {
    let date = bulletin
        .published_date
        .get()
        .map_or_else(|| NA.to_string(), |d| d.format("%Y-%m-%d").to_string());
    let severity = bulletin
        .severity
        .get()
        .map_or(NA, |s| s.as_str());

    [
        text_or_na(bulletin.id.as_deref()),
        text_or_na(bulletin.title.as_deref()),
        date,
        text_or_na(bulletin.summary.as_deref()),
        severity.to_string(),
        flag_or_na(bulletin.reboot_required.get()).to_string(),
        flag_or_na(bulletin.livepatch.get()).to_string(),
    ]
    .join("\t")
}

impl ReportGenerator for TsvReporter {
    fn generate(&self, bulletins: &[Bulletin]) -> Result<String, ReportError> {
        let mut content = String::with_capacity(128 * (bulletins.len() + 1));
        content.push_str(TSV_HEADER);
        content.push('\n');

        for bulletin in bulletins {
            writeln!(content, "{}", format_row(bulletin))
                .map_err(|e| ReportError::SerializationError(e.to_string()))?;
        }

        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Tsv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;
    use chrono::NaiveDate;

    fn enriched() -> Bulletin {
        let mut bulletin = Bulletin::new(
            Some("USN-7513-1".into()),
            Some("Linux kernel vulnerabilities".into()),
        );
        bulletin
            .published_date
            .set(NaiveDate::from_ymd_opt(2025, 5, 14).unwrap());
        bulletin.summary = Some("Several\tsecurity issues\nwere fixed".into());
        bulletin.severity.set(Severity::High);
        bulletin.reboot_required.set(Availability::Yes);
        bulletin.livepatch.set(Availability::Unknown);
        bulletin
    }

    #[test]
    fn test_header_only_for_empty_input() {
        let report = TsvReporter::new().generate(&[]).unwrap();
        assert_eq!(report, format!("{TSV_HEADER}\n"));
    }

    #[test]
    fn test_row_layout() {
        let report = TsvReporter::new().generate(&[enriched()]).unwrap();
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "USN-7513-1\tLinux kernel vulnerabilities\t2025-05-14\t\
             Several security issues were fixed\tHigh\tyes\tNA"
        );
    }

    #[test]
    fn test_every_row_has_seven_columns() {
        let report = TsvReporter::new()
            .generate(&[enriched(), Bulletin::default()])
            .unwrap();
        for line in report.lines() {
            assert_eq!(line.split('\t').count(), 7, "bad row: {line:?}");
        }
    }

    #[test]
    fn test_unset_fields_are_na() {
        let row = format_row(&Bulletin::default());
        assert_eq!(row, "NA\tNA\tNA\tNA\tNA\tNA\tNA");
    }

    #[test]
    fn test_unknown_severity_is_printed() {
        let mut bulletin = Bulletin::new(Some("USN-1-1".into()), Some("t".into()));
        bulletin.severity.set(Severity::Unknown);
        bulletin.livepatch.set(Availability::No);
        let row = format_row(&bulletin);
        assert!(row.ends_with("\tUnknown\tNA\tno"), "{row}");
    }

    #[test]
    fn test_tabs_in_title_replaced() {
        let bulletin = Bulletin::new(Some("USN-1-1".into()), Some("a\tb".into()));
        assert!(format_row(&bulletin).starts_with("USN-1-1\ta b\t"));
    }
}
