//! Extraction settings

use super::logging_config::{LoggingConfig, LoggingOverrides};
use crate::error::{TrajError, TrajResult};
use crate::extractor::{ExtractOptions, UnmappedPolicy};
use crate::report::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parameter-space file irace reads by default
pub const DEFAULT_PARAM_FILE: &str = "paramfile.irace";

/// Base name of the written trajectory table
pub const DEFAULT_OUTPUT_BASE: &str = "traj_irace";

/// Fully resolved settings for one extraction run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajConfig {
    /// Parameter-space file with the identifier to name mapping
    pub param_file: PathBuf,
    /// Output base name; reports land at `<base>_wc.<ext>`
    pub output_base: String,
    pub output_format: ReportFormat,
    pub unmapped_policy: UnmappedPolicy,
    /// Flush a complete record still open at end of log
    pub flush_at_eof: bool,
    pub logging: LoggingConfig,
}

impl Default for TrajConfig {
    fn default() -> Self {
        Self {
            param_file: PathBuf::from(DEFAULT_PARAM_FILE),
            output_base: DEFAULT_OUTPUT_BASE.to_string(),
            output_format: ReportFormat::default(),
            unmapped_policy: UnmappedPolicy::default(),
            flush_at_eof: false,
            logging: LoggingConfig::default(),
        }
    }
}

/// Settings supplied by a single source; unset fields keep earlier values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub param_file: Option<PathBuf>,
    pub output_base: Option<String>,
    pub output_format: Option<ReportFormat>,
    pub unmapped_policy: Option<UnmappedPolicy>,
    pub flush_at_eof: Option<bool>,
    pub logging: Option<LoggingOverrides>,
}

impl TrajConfig {
    /// Apply the settings of a later source
    pub fn merge(&mut self, other: ConfigOverrides) {
        if let Some(param_file) = other.param_file {
            self.param_file = param_file;
        }
        if let Some(output_base) = other.output_base {
            self.output_base = output_base;
        }
        if let Some(format) = other.output_format {
            self.output_format = format;
        }
        if let Some(policy) = other.unmapped_policy {
            self.unmapped_policy = policy;
        }
        if let Some(flush) = other.flush_at_eof {
            self.flush_at_eof = flush;
        }
        if let Some(logging) = other.logging {
            self.logging.merge(logging);
        }
    }

    pub fn validate(&self) -> TrajResult<()> {
        if self.param_file.as_os_str().is_empty() {
            return Err(TrajError::config("param_file must not be empty"));
        }
        if self.output_base.trim().is_empty() {
            return Err(TrajError::config("output_base must not be empty"));
        }
        self.logging.validate().map_err(TrajError::config)
    }

    /// Extractor switches derived from these settings
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions::default()
            .with_unmapped_policy(self.unmapped_policy)
            .with_flush_at_eof(self.flush_at_eof)
    }
}
