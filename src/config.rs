//! Configuration file support for pom-graph.
//!
//! Provides YAML-based configuration through `pom-graph.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use pom_graph::shared::error::PomGraphError;
use pom_graph::shared::security::safe_read_to_string;
use pom_graph::shared::Result;

pub const CONFIG_FILENAME: &str = "pom-graph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// File listing one repository location per line
    pub repositories_file: Option<PathBuf>,
    /// Repository locations given inline
    pub repositories: Option<Vec<String>>,
    pub restriction: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub cluster: Option<bool>,
    pub output: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = safe_read_to_string(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (name, value) in [("width", config.width), ("height", config.height)] {
        if value == Some(0) {
            return Err(PomGraphError::Validation {
                message: format!(
                    "config field {} must be greater than zero (remove it to use the default of 1000)",
                    name
                ),
            }
            .into());
        }
    }

    if let Some(ref repositories) = config.repositories {
        for (i, location) in repositories.iter().enumerate() {
            if location.trim().is_empty() {
                bail!(
                    "Invalid config: repositories[{}] must not be empty.\n\n\
                     💡 Hint: Each entry must be a URL or a path to a repository root.",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
