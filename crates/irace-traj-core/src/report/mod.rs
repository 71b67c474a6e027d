//! Report generation for extracted trajectories
//!
//! The CSV table is the artifact downstream trajectory tooling consumes; JSON
//! and the terminal table are conveniences for inspection.

mod csv;
mod json;
mod table;

pub use csv::{CSV_HEADER, CsvReporter};
pub use json::JsonReporter;
pub use table::TableReporter;

use crate::error::{TrajError, TrajResult};
use crate::extractor::Extraction;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
    Table,
}

impl ReportFormat {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(ReportFormat::Csv),
            "json" => Some(ReportFormat::Json),
            "table" => Some(ReportFormat::Table),
            _ => None,
        }
    }

    /// Output file for a base name, `None` for formats printed to the terminal
    pub fn output_path(self, base: &str) -> Option<PathBuf> {
        match self {
            ReportFormat::Csv => Some(PathBuf::from(format!("{}_wc.csv", base))),
            ReportFormat::Json => Some(PathBuf::from(format!("{}_wc.json", base))),
            ReportFormat::Table => None,
        }
    }
}

/// Write an extraction in the given format
///
/// File formats land at `<base>_wc.<ext>` and the written path is returned.
/// The table format is written to `stdout` instead.
pub fn write_report(
    extraction: &Extraction,
    format: ReportFormat,
    base: &str,
    stdout: &mut dyn Write,
) -> TrajResult<Option<PathBuf>> {
    let Some(path) = format.output_path(base) else {
        stdout.write_all(TableReporter::generate(extraction).as_bytes())?;
        return Ok(None);
    };

    let mut writer = create_output(&path)?;
    if format == ReportFormat::Json {
        let json = JsonReporter::generate(&extraction.trajectory)?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
    } else {
        CsvReporter::write(&extraction.trajectory, &mut writer)?;
    }
    writer.flush().map_err(|e| {
        TrajError::io_with_path(
            format!("Failed to write report {:?}: {}", path, e),
            path.display().to_string(),
        )
    })?;

    info!(
        path = %path.display(),
        entries = extraction.trajectory.len(),
        "trajectory report written"
    );
    Ok(Some(path))
}

fn create_output(path: &Path) -> TrajResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        TrajError::io_with_path(
            format!("Failed to create report {:?}: {}", path, e),
            path.display().to_string(),
        )
    })?;
    Ok(BufWriter::new(file))
}

/// Render a float the way the trajectory table expects: shortest round-trip
/// digits, always with a fractional part (`340.0`, `12.5`)
pub(crate) fn format_float(value: f64) -> String {
    format!("{:?}", value)
}
