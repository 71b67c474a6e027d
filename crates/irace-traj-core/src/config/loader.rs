//! Layered configuration loader

use super::env_loader;
use super::file_loader;
use super::logging_config::LoggingOverrides;
use super::model::{ConfigOverrides, TrajConfig};
use crate::error::{TrajError, TrajResult};
use crate::extractor::UnmappedPolicy;
use crate::report::ReportFormat;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Source of configuration data
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Configuration from a file
    File(PathBuf),
    /// Configuration from environment variables
    Environment,
    /// Configuration from command line arguments
    CommandLine(HashMap<String, String>),
    /// Default configuration
    Default,
}

/// Configuration loader with support for multiple sources
pub struct ConfigLoader {
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a configuration source
    pub fn add_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Add a file source
    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(ConfigSource::File(path.as_ref().to_path_buf()))
    }

    /// Add environment variables source
    pub fn with_env(self) -> Self {
        self.add_source(ConfigSource::Environment)
    }

    /// Add command line arguments source
    pub fn with_args(self, args: HashMap<String, String>) -> Self {
        self.add_source(ConfigSource::CommandLine(args))
    }

    /// Add default configuration source
    pub fn with_defaults(self) -> Self {
        self.add_source(ConfigSource::Default)
    }

    /// Load configuration from all sources
    pub fn load(self) -> TrajResult<TrajConfig> {
        let mut config = TrajConfig::default();

        for source in &self.sources {
            let overrides = load_from_source(source)?;
            config.merge(overrides);
        }

        config.validate()?;
        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn load_from_source(source: &ConfigSource) -> TrajResult<ConfigOverrides> {
    match source {
        ConfigSource::File(path) => {
            tracing::debug!("Loading config from file: {}", path.display());
            file_loader::load_from_file(path)
        }
        ConfigSource::Environment => {
            tracing::debug!("Loading config from environment");
            env_loader::load_from_env()
        }
        ConfigSource::CommandLine(args) => {
            tracing::debug!("Loading config from command line");
            load_from_args(args)
        }
        ConfigSource::Default => Ok(ConfigOverrides::default()),
    }
}

/// Load settings from command line key/value pairs
///
/// Keys: `param_file`, `output_base`, `output_format`, `unmapped_policy`,
/// `flush_at_eof`, `log_level`, `log_format`.
pub fn load_from_args(args: &HashMap<String, String>) -> TrajResult<ConfigOverrides> {
    let mut overrides = ConfigOverrides::default();

    if let Some(param_file) = args.get("param_file") {
        overrides.param_file = Some(PathBuf::from(param_file));
    }
    if let Some(output_base) = args.get("output_base") {
        overrides.output_base = Some(output_base.clone());
    }
    if let Some(format) = args.get("output_format") {
        let format = ReportFormat::from_str(format)
            .ok_or_else(|| TrajError::config(format!("Invalid output format: {}", format)))?;
        overrides.output_format = Some(format);
    }
    if let Some(policy) = args.get("unmapped_policy") {
        let policy = UnmappedPolicy::from_str(policy)
            .ok_or_else(|| TrajError::config(format!("Invalid unmapped policy: {}", policy)))?;
        overrides.unmapped_policy = Some(policy);
    }
    if let Some(flush) = args.get("flush_at_eof") {
        let flush: bool = flush
            .parse()
            .map_err(|_| TrajError::config(format!("Invalid flush_at_eof value: {}", flush)))?;
        overrides.flush_at_eof = Some(flush);
    }

    let logging = LoggingOverrides {
        level: args.get("log_level").cloned(),
        format: args.get("log_format").cloned(),
    };
    if logging != LoggingOverrides::default() {
        overrides.logging = Some(logging);
    }

    Ok(overrides)
}
