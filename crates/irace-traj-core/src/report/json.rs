//! JSON report generation

use crate::error::TrajResult;
use crate::types::TrajectoryEntry;

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Generate a pretty-printed JSON array of entries
    pub fn generate(trajectory: &[TrajectoryEntry]) -> TrajResult<String> {
        let json = serde_json::to_string_pretty(trajectory)?;
        Ok(json)
    }

    /// Generate a compact JSON report (no pretty printing)
    pub fn generate_compact(trajectory: &[TrajectoryEntry]) -> TrajResult<String> {
        let json = serde_json::to_string(trajectory)?;
        Ok(json)
    }
}
