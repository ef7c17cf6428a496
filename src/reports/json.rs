//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::model::Bulletin;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, bulletins: &[Bulletin]) -> Result<String, ReportError> {
        let mut json = if self.pretty {
            serde_json::to_string_pretty(bulletins)
        } else {
            serde_json::to_string(bulletins)
        }
        .map_err(|e| ReportError::SerializationError(e.to_string()))?;
        json.push('\n');
        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
