//! Configuration loading and management
//!
//! Settings can come from several sources:
//! - Built-in defaults
//! - A configuration file (JSON, TOML, YAML)
//! - Environment variables (`IRACE_TRAJ_*`)
//! - Command line arguments
//!
//! Sources are merged in the order they are added, later sources overriding
//! earlier ones.

mod env_loader;
mod file_loader;
mod loader;
mod logging_config;
mod model;

pub use env_loader::{ENV_PREFIX, load_from_env, load_from_vars};
pub use file_loader::load_from_file;
pub use loader::{ConfigLoader, ConfigSource, load_from_args};
pub use logging_config::{LoggingConfig, LoggingOverrides};
pub use model::{ConfigOverrides, DEFAULT_OUTPUT_BASE, DEFAULT_PARAM_FILE, TrajConfig};
