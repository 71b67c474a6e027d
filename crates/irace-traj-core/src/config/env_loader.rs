//! Environment variable-based configuration loading

use super::logging_config::LoggingOverrides;
use super::model::ConfigOverrides;
use crate::error::{TrajError, TrajResult};
use crate::extractor::UnmappedPolicy;
use crate::report::ReportFormat;
use std::env;
use std::path::PathBuf;

/// Prefix shared by all recognized variables
pub const ENV_PREFIX: &str = "IRACE_TRAJ_";

/// Load settings from the process environment
///
/// Recognized variables: `IRACE_TRAJ_PARAM_FILE`, `IRACE_TRAJ_OUTPUT`,
/// `IRACE_TRAJ_FORMAT`, `IRACE_TRAJ_STRICT`, `IRACE_TRAJ_FLUSH_AT_EOF`,
/// `IRACE_TRAJ_LOG_LEVEL`, `IRACE_TRAJ_LOG_FORMAT`.
pub fn load_from_env() -> TrajResult<ConfigOverrides> {
    load_from_vars(env::vars())
}

/// Load settings from an explicit set of `(name, value)` pairs
pub fn load_from_vars<I>(vars: I) -> TrajResult<ConfigOverrides>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut overrides = ConfigOverrides::default();
    let mut logging = LoggingOverrides::default();

    for (name, value) in vars {
        let Some(key) = name.strip_prefix(ENV_PREFIX) else {
            continue;
        };
        match key {
            "PARAM_FILE" => overrides.param_file = Some(PathBuf::from(value)),
            "OUTPUT" => overrides.output_base = Some(value),
            "FORMAT" => {
                let format = ReportFormat::from_str(&value).ok_or_else(|| {
                    TrajError::config(format!("Invalid {}FORMAT value: {}", ENV_PREFIX, value))
                })?;
                overrides.output_format = Some(format);
            }
            "STRICT" => {
                let strict = parse_bool(&value).ok_or_else(|| {
                    TrajError::config(format!("Invalid {}STRICT value: {}", ENV_PREFIX, value))
                })?;
                overrides.unmapped_policy = Some(if strict {
                    UnmappedPolicy::Fail
                } else {
                    UnmappedPolicy::SkipRecord
                });
            }
            "FLUSH_AT_EOF" => {
                let flush = parse_bool(&value).ok_or_else(|| {
                    TrajError::config(format!(
                        "Invalid {}FLUSH_AT_EOF value: {}",
                        ENV_PREFIX, value
                    ))
                })?;
                overrides.flush_at_eof = Some(flush);
            }
            "LOG_LEVEL" => logging.level = Some(value),
            "LOG_FORMAT" => logging.format = Some(value),
            other => tracing::debug!(variable = other, "ignoring unknown environment setting"),
        }
    }

    if logging != LoggingOverrides::default() {
        overrides.logging = Some(logging);
    }
    Ok(overrides)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_load_from_vars() {
        let overrides = load_from_vars(vars(&[
            ("IRACE_TRAJ_PARAM_FILE", "params.txt"),
            ("IRACE_TRAJ_OUTPUT", "out/run"),
            ("IRACE_TRAJ_FORMAT", "JSON"),
            ("IRACE_TRAJ_STRICT", "yes"),
            ("IRACE_TRAJ_LOG_LEVEL", "debug"),
            ("PATH", "/usr/bin"),
        ]))
        .unwrap();

        assert_eq!(overrides.param_file, Some(PathBuf::from("params.txt")));
        assert_eq!(overrides.output_base, Some("out/run".to_string()));
        assert_eq!(overrides.output_format, Some(ReportFormat::Json));
        assert_eq!(overrides.unmapped_policy, Some(UnmappedPolicy::Fail));
        assert_eq!(overrides.flush_at_eof, None);
        assert_eq!(
            overrides.logging,
            Some(LoggingOverrides {
                level: Some("debug".to_string()),
                format: None
            })
        );
    }

    #[test]
    fn test_no_vars_gives_empty_overrides() {
        let overrides = load_from_vars(vars(&[("HOME", "/root")])).unwrap();
        assert_eq!(overrides, ConfigOverrides::default());
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(load_from_vars(vars(&[("IRACE_TRAJ_FORMAT", "xml")])).is_err());
        assert!(load_from_vars(vars(&[("IRACE_TRAJ_FLUSH_AT_EOF", "perhaps")])).is_err());
    }
}
