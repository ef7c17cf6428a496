//! Output handling for reports.

use crate::error::{DigestError, ReportErrorKind, Result};
use std::io::Write;
use std::path::PathBuf;

/// Target for output - either stdout or a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Stdout => write_to(&mut std::io::stdout().lock(), content),
        OutputTarget::File(path) => {
            std::fs::write(path, content).map_err(|e| DigestError::io(path, e))?;
            tracing::info!("Report written to {}", path.display());
            Ok(())
        }
    }
}

/// Write the whole report to `writer` and flush it
fn write_to(writer: &mut dyn Write, content: &str) -> Result<()> {
    writer
        .write_all(content.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| {
            DigestError::report("writing report", ReportErrorKind::WriteError(e.to_string()))
        })
}
