//! **Parse, filter and enrich Ubuntu Security Notice digests.**
//!
//! `usn-digest` turns a plain-text digest of `ubuntu-security-announce`
//! messages into a list of structured notices, keeps those that apply to the
//! target Ubuntu releases, enriches them with severity, Livepatch and reboot
//! information from the Ubuntu security website, and renders a TSV or JSON
//! report.
//!
//! ## Core Concepts & Modules
//!
//! - **[`parsers`]**: the line-oriented state machine that reconstructs
//!   [`Bulletin`] records from free-form digest text.
//! - **[`filter`]**: release applicability and platform-variant exclusion.
//! - **[`enrichment`]**: severity and detail resolvers over the
//!   [`SecurityLookup`] capability, plus the HTTP client behind the
//!   `enrichment` feature.
//! - **[`reports`]**: TSV and JSON generators.
//! - **[`pipeline`]**: parse → filter → enrich → report orchestration.
//!
//! ## Getting Started
//!
//! ```
//! use usn_digest::{parse_digest_str, AppConfig, NoOpLookup};
//! use usn_digest::pipeline::process_notices;
//! use usn_digest::reports::{create_reporter, ReportFormat};
//!
//! let digest = "\
//! Subject: [USN-7513-1] Linux kernel vulnerabilities
//! May 14, 2025
//! - Ubuntu 24.04 LTS
//! CVE-2025-0001
//! ";
//!
//! let outcome = process_notices(parse_digest_str(digest), &AppConfig::default(), NoOpLookup);
//! let report = create_reporter(ReportFormat::Tsv).generate(&outcome.notices).unwrap();
//! assert!(report.contains("USN-7513-1\tLinux kernel vulnerabilities\t2025-05-14"));
//! ```
//!
//! ## Feature Flags
//!
//! - `enrichment` (default): the `reqwest`/`scraper` based
//!   `UbuntuSecurityClient`. Without it every lookup is skipped and the
//!   enrichment fields are reported as unknown.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod filter;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, EnrichmentConfig, FilterConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use enrichment::{
    EnricherConfig, EnrichmentError, EnrichmentStats, NoOpLookup, NoticeEnricher, SecurityLookup,
};
#[cfg(feature = "enrichment")]
pub use enrichment::{UbuntuClientConfig, UbuntuSecurityClient};
pub use error::{DigestError, Result};
pub use filter::NoticeFilter;
pub use model::{Availability, Bulletin, SetOnce, Severity};
pub use parsers::{parse_digest_reader, parse_digest_str, DigestParser};
pub use reports::{ReportFormat, ReportGenerator};
