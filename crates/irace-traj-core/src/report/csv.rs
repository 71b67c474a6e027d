//! Ragged CSV trajectory table

use super::format_float;
use crate::error::TrajResult;
use crate::types::TrajectoryEntry;
use std::io::Write;

/// Fixed header of the wallclock trajectory table
pub const CSV_HEADER: [&str; 6] = [
    "CPU Time Used",
    "Estimated Training Performance",
    "Wallclock Time",
    "Incumbent ID",
    "Automatic Configurator (CPU) Time",
    "Configuration...",
];

/// CSV report writer
///
/// Rows have five fixed columns followed by one column per configuration
/// token, so row width varies. Tokens are written verbatim.
pub struct CsvReporter;

impl CsvReporter {
    /// Write header and rows to `writer`
    pub fn write<W: Write>(trajectory: &[TrajectoryEntry], writer: &mut W) -> TrajResult<()> {
        writeln!(writer, "{}", CSV_HEADER.join(","))?;
        for entry in trajectory {
            writeln!(writer, "{}", Self::row(entry))?;
        }
        Ok(())
    }

    /// Generate the whole table as a string
    pub fn generate(trajectory: &[TrajectoryEntry]) -> TrajResult<String> {
        let mut buf = Vec::new();
        Self::write(trajectory, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn row(entry: &TrajectoryEntry) -> String {
        let mut fields = vec![
            entry.eval_index.to_string(),
            format_float(entry.cost),
            format_float(entry.wallclock_time),
            entry.incumbent_id.to_string(),
            entry.config_time.to_string(),
        ];
        fields.extend(entry.configuration.iter().cloned());
        fields.join(",")
    }
}
