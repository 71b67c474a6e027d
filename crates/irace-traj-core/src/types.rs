//! Trajectory data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// One incumbent-improvement event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryEntry {
    /// CPU time used by target runs; irace does not report it, always 0
    pub eval_index: u64,
    /// Estimated training performance of the incumbent
    pub cost: f64,
    /// Wallclock time consumed by the configurator so far
    pub wallclock_time: f64,
    /// 1-based incumbent counter, contiguous within one extraction
    pub incumbent_id: u64,
    /// Configurator CPU time; not reported by irace, always 0
    pub config_time: u64,
    /// Rendered `name="value"` tokens in irace parameter order
    pub configuration: Vec<String>,
}

impl TrajectoryEntry {
    pub fn new(
        cost: f64,
        wallclock_time: f64,
        incumbent_id: u64,
        configuration: Vec<String>,
    ) -> Self {
        Self {
            eval_index: 0,
            cost,
            wallclock_time,
            incumbent_id,
            config_time: 0,
            configuration,
        }
    }
}

/// Ordered sequence of trajectory entries, in log order
pub type Trajectory = Vec<TrajectoryEntry>;

/// Non-fatal condition observed while scanning a log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExtractionWarning {
    /// A description section closed before wallclock time and cost were both seen
    IncompleteRecord {
        line: usize,
        wallclock_time: Option<f64>,
        cost: Option<f64>,
        configuration: Option<Vec<String>>,
    },
    /// A configuration named an identifier absent from the parameter file
    UnmappedIdentifier { line: usize, identifier: String },
    /// The log ended inside the two lines following a description marker
    TruncatedDescription { line: usize },
    /// A pending record was still open when the log ended
    DroppedAtEndOfLog {
        wallclock_time: Option<f64>,
        cost: Option<f64>,
        configuration: Option<Vec<String>>,
    },
}

impl fmt::Display for ExtractionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteRecord {
                line,
                wallclock_time,
                cost,
                configuration,
            } => write!(
                f,
                "line {}: could not fully parse irace stdout ({}, {}, {})",
                line,
                display_opt(wallclock_time),
                display_opt(cost),
                display_config(configuration)
            ),
            Self::UnmappedIdentifier { line, identifier } => write!(
                f,
                "line {}: identifier '{}' is not in the parameter file, record skipped",
                line, identifier
            ),
            Self::TruncatedDescription { line } => write!(
                f,
                "line {}: log ended inside a best-so-far description",
                line
            ),
            Self::DroppedAtEndOfLog {
                wallclock_time,
                cost,
                configuration,
            } => write!(
                f,
                "end of log: dropped open record ({}, {}, {})",
                display_opt(wallclock_time),
                display_opt(cost),
                display_config(configuration)
            ),
        }
    }
}

fn display_opt(value: &Option<f64>) -> String {
    match value {
        Some(v) => format!("{:?}", v),
        None => "None".to_string(),
    }
}

fn display_config(configuration: &Option<Vec<String>>) -> String {
    match configuration {
        Some(tokens) => format!("[{}]", tokens.join(", ")),
        None => "None".to_string(),
    }
}
