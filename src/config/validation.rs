//! Configuration validation for usn-digest.

use super::defaults::{MAX_CONCURRENT_LIMIT, MAX_TIMEOUT_SECS};
use super::types::{AppConfig, EnrichmentConfig, FilterConfig, OutputConfig};

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.filter.validate());
        errors.extend(self.enrichment.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for FilterConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.target_releases.is_empty() {
            errors.push(ConfigError::new(
                "filter.target_releases",
                "At least one target release is required",
            ));
        }
        if self.target_releases.iter().any(|r| r.trim().is_empty()) {
            errors.push(ConfigError::new(
                "filter.target_releases",
                "Release labels must not be blank",
            ));
        }
        errors
    }
}

impl Validatable for EnrichmentConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(1..=MAX_CONCURRENT_LIMIT).contains(&self.max_concurrent) {
            errors.push(ConfigError::new(
                "enrichment.max_concurrent",
                format!(
                    "Must be between 1 and {MAX_CONCURRENT_LIMIT}, got {}",
                    self.max_concurrent
                ),
            ));
        }

        if !(1..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            errors.push(ConfigError::new(
                "enrichment.timeout_secs",
                format!(
                    "Must be between 1 and {MAX_TIMEOUT_SECS}, got {}",
                    self.timeout_secs
                ),
            ));
        }

        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            errors.push(ConfigError::new(
                "enrichment.base_url",
                format!("Expected an http(s) URL, got '{}'", self.base_url),
            ));
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(parent) = self.file.as_deref().and_then(std::path::Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }

        errors
    }
}
