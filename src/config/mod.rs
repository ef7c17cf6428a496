//! Configuration module for usn-digest.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.usn-digest.yaml` file in the working directory or
//! `~/.config/usn-digest/`:
//!
//! ```yaml
//! filter:
//!   target_releases: ["24.04", "24.04 LTS"]
//! enrichment:
//!   timeout_secs: 15
//!   max_concurrent: 4
//! output:
//!   format: json
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_MAX_CONCURRENT, DEFAULT_SECURITY_BASE_URL, DEFAULT_TARGET_RELEASES,
    DEFAULT_TIMEOUT_SECS, MAX_CONCURRENT_LIMIT, MAX_TIMEOUT_SECS,
};
pub use types::{
    AppConfig, AppConfigBuilder, ConfigOverrides, EnrichmentConfig, FilterConfig, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_search_dirs, discover_config_file, generate_example_config, load_config,
    load_config_file, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// The schema documents every option accepted in `.usn-digest.yaml` and
/// can be used by editors for validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema: serde_json::Value = serde_json::from_str(&generate_json_schema()).unwrap();
        let properties = &schema["properties"];
        assert!(properties.get("filter").is_some());
        assert!(properties.get("enrichment").is_some());
        assert!(properties.get("output").is_some());
    }
}
