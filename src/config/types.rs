//! Configuration types for usn-digest.

use super::defaults::{
    default_target_releases, DEFAULT_MAX_CONCURRENT, DEFAULT_SECURITY_BASE_URL,
    DEFAULT_TIMEOUT_SECS,
};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Unified application configuration that can be loaded from CLI args or config files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Which notices are kept
    pub filter: FilterConfig,
    /// Lookups against the Ubuntu security website
    pub enrichment: EnrichmentConfig,
    /// Output format and destination
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Replace the target release labels.
    pub fn target_releases<I, S>(mut self, releases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.filter.target_releases = releases.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable network enrichment.
    pub const fn enrichment_enabled(mut self, enabled: bool) -> Self {
        self.config.enrichment.enabled = enabled;
        self
    }

    /// Set the per-request timeout.
    pub const fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.enrichment.timeout_secs = secs;
        self
    }

    /// Set the number of notices enriched concurrently.
    pub const fn max_concurrent(mut self, jobs: usize) -> Self {
        self.config.enrichment.max_concurrent = jobs;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

/// Notice filtering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FilterConfig {
    /// Release labels a notice must list (exact match), e.g. "24.04 LTS"
    pub target_releases: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            target_releases: default_target_releases(),
        }
    }
}

/// Enrichment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Query the Ubuntu security website; when false every lookup is skipped
    pub enabled: bool,
    /// Base URL of the security pages
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Number of notices enriched concurrently
    pub max_concurrent: usize,
}

impl EnrichmentConfig {
    /// Per-request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: DEFAULT_SECURITY_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Output file path (stdout when absent)
    pub file: Option<PathBuf>,
}

/// Values given on the command line; `None`/empty means "not given".
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub target_releases: Vec<String>,
    pub offline: bool,
    pub timeout_secs: Option<u64>,
    pub max_concurrent: Option<usize>,
    pub format: Option<ReportFormat>,
    pub file: Option<PathBuf>,
}
