//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, ConfigOverrides};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".usn-digest.yaml",
    ".usn-digest.yml",
    "usn-digest.yaml",
    "usn-digest.yml",
];

/// Directories searched for a config file, in order.
///
/// 1. Current directory
/// 2. User config directory (~/.config/usn-digest/)
/// 3. Home directory
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    let mut search = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        search.push(cwd);
    }
    if let Some(config_dir) = dirs::config_dir() {
        search.push(config_dir.join("usn-digest"));
    }
    if let Some(home) = dirs::home_dir() {
        search.push(home);
    }
    search
}

/// Discover a config file by searching standard locations.
///
/// An explicit path wins if it exists; otherwise the directories from
/// [`config_search_dirs`] are searched in order.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    config_search_dirs()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load the effective file configuration.
///
/// An explicit path must exist and parse. Without one, the first discovered
/// file is loaded; if none is found the defaults are used.
pub fn load_config(
    explicit_path: Option<&Path>,
) -> Result<(AppConfig, Option<PathBuf>), ConfigFileError> {
    if let Some(path) = explicit_path {
        let config = load_config_file(path)?;
        return Ok((config, Some(path.to_path_buf())));
    }

    match discover_config_file(None) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            let config = load_config_file(&path)?;
            Ok((config, Some(path)))
        }
        None => Ok((AppConfig::default(), None)),
    }
}

impl AppConfig {
    /// Layer command-line values over this config.
    pub fn merge(&mut self, overrides: &ConfigOverrides) {
        if !overrides.target_releases.is_empty() {
            self.filter
                .target_releases
                .clone_from(&overrides.target_releases);
        }

        if overrides.offline {
            self.enrichment.enabled = false;
        }
        if let Some(secs) = overrides.timeout_secs {
            self.enrichment.timeout_secs = secs;
        }
        if let Some(jobs) = overrides.max_concurrent {
            self.enrichment.max_concurrent = jobs;
        }

        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.file.is_some() {
            self.output.file.clone_from(&overrides.file);
        }
    }

    /// Load from file and merge with CLI overrides.
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<(Self, Option<PathBuf>), ConfigFileError> {
        let (mut config, loaded_from) = load_config(config_path)?;
        config.merge(overrides);
        Ok((config, loaded_from))
    }
}

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# usn-digest configuration
# Place this file at .usn-digest.yaml in the working directory or ~/.config/usn-digest/
# Command-line flags override these values.

{}",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}
