//! Unified error types for usn-digest.
//!
//! Run-aborting failures (unreadable input, unwritable output, invalid
//! configuration) surface as [`DigestError`]. Individual lookup failures
//! during enrichment never do; they degrade to `Unknown` values and are
//! counted in [`crate::enrichment::EnrichmentStats`].

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for usn-digest operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DigestError {
    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// Errors setting up enrichment
    #[error("Enrichment failed: {context}")]
    Enrichment {
        context: String,
        #[source]
        source: EnrichmentErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Specific enrichment error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EnrichmentErrorKind {
    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Convenient Result type for usn-digest operations
pub type Result<T> = std::result::Result<T, DigestError>;

impl DigestError {
    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an enrichment error
    pub fn enrichment(context: impl Into<String>, source: EnrichmentErrorKind) -> Self {
        Self::Enrichment {
            context: context.into(),
            source,
        }
    }
}

impl From<crate::reports::ReportError> for DigestError {
    fn from(err: crate::reports::ReportError) -> Self {
        match err {
            crate::reports::ReportError::IoError(source) => {
                Self::report("writing report", ReportErrorKind::WriteError(source.to_string()))
            }
            crate::reports::ReportError::SerializationError(msg) => {
                Self::report("serializing notices", ReportErrorKind::JsonSerializationError(msg))
            }
        }
    }
}
