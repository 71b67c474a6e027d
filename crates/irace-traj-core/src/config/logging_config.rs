//! Logging configuration

use serde::{Deserialize, Serialize};

/// Levels accepted by the `level` setting
const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (pretty, compact, json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Partial logging settings from one configuration source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOverrides {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl LoggingConfig {
    /// Merge with settings from a later source
    pub fn merge(&mut self, other: LoggingOverrides) {
        if let Some(level) = other.level.filter(|l| !l.is_empty()) {
            self.level = level;
        }
        if let Some(format) = other.format.filter(|f| !f.is_empty()) {
            self.format = format;
        }
    }

    /// Check that level and format are understood
    pub fn validate(&self) -> Result<(), String> {
        if !LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(format!(
                "unknown log level '{}', expected one of {}",
                self.level,
                LEVELS.join(", ")
            ));
        }
        match self.format.as_str() {
            "pretty" | "compact" | "json" => Ok(()),
            other => Err(format!(
                "unknown log format '{}', expected pretty, compact or json",
                other
            )),
        }
    }
}
