//! File-based configuration loading

use super::model::ConfigOverrides;
use crate::error::{TrajError, TrajResult};
use std::fs;
use std::path::Path;

/// Load settings from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// Returns empty overrides if the file doesn't exist.
pub fn load_from_file(path: &Path) -> TrajResult<ConfigOverrides> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(ConfigOverrides::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        TrajError::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let overrides = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            TrajError::config(format!(
                "Failed to parse TOML config '{}': {}",
                path.display(),
                e
            ))
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            TrajError::config(format!(
                "Failed to parse YAML config '{}': {}",
                path.display(),
                e
            ))
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            TrajError::config(format!(
                "Failed to parse JSON config '{}': {}",
                path.display(),
                e
            ))
        })?,
    };

    Ok(overrides)
}
