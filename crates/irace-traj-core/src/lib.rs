//! irace trajectory extraction
//!
//! Turns the stdout log of an irace run into an incumbent trajectory table.
//!
//! # Overview
//!
//! - **Name mapping**: irace refers to parameters by short internal names; the
//!   parameter-space file maps them back to the solver's own switches.
//! - **Extraction**: a single forward pass over the log collects wallclock
//!   time, cost and the best-so-far configuration into trajectory entries.
//! - **Reports**: the trajectory is written as a ragged CSV table (the format
//!   consumed by downstream trajectory tooling), JSON or a terminal table.
//!
//! # Example
//!
//! ```rust,ignore
//! use irace_traj_core::{ExtractOptions, NameMapping, TrajectoryExtractor};
//!
//! let mapping = NameMapping::from_path("paramfile.irace")?;
//! let extraction = TrajectoryExtractor::new(&mapping, ExtractOptions::default())
//!     .extract_path("irace.stdout")?;
//! println!("{} incumbents", extraction.trajectory.len());
//! ```

pub mod config;
pub mod error;
pub mod extractor;
pub mod mapping;
pub mod report;
pub mod types;

// Re-exports for convenience
pub use config::{ConfigLoader, ConfigSource, LoggingConfig, TrajConfig};
pub use error::{TrajError, TrajResult};
pub use extractor::{ExtractOptions, Extraction, TrajectoryExtractor, UnmappedPolicy};
pub use mapping::NameMapping;
pub use report::{ReportFormat, write_report};
pub use types::{ExtractionWarning, Trajectory, TrajectoryEntry};
