//! Trajectory extraction from irace stdout
//!
//! The extractor makes one forward pass over the log. Marker lines fill a
//! pending record; every `Description of the best-so-far configuration:`
//! block closes it. Complete records become trajectory entries, incomplete
//! ones are reported as warnings and discarded.

mod lines;
mod marker;
mod pending;

#[cfg(test)]
mod tests;

pub use lines::LogLines;
pub use marker::Marker;
pub use pending::PendingRecord;

use crate::error::{TrajError, TrajResult};
use crate::mapping::{NameMapping, column_name};
use crate::types::{ExtractionWarning, Trajectory};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Raw values irace prints for parameters that are inactive in a configuration
const NOT_AVAILABLE: [&str; 2] = ["<NA>", "NA"];

/// What to do when a configuration names an identifier the parameter file lacks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmappedPolicy {
    /// Drop the record being assembled and keep scanning
    #[default]
    SkipRecord,
    /// Abort the whole extraction
    Fail,
}

impl UnmappedPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "skip_record" | "skip" => Some(UnmappedPolicy::SkipRecord),
            "fail" | "strict" => Some(UnmappedPolicy::Fail),
            _ => None,
        }
    }
}

/// Extraction behavior switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub unmapped_policy: UnmappedPolicy,
    /// Flush a complete record still open when the log ends
    pub flush_at_eof: bool,
}

impl ExtractOptions {
    pub fn with_unmapped_policy(mut self, policy: UnmappedPolicy) -> Self {
        self.unmapped_policy = policy;
        self
    }

    pub fn with_flush_at_eof(mut self, flush: bool) -> Self {
        self.flush_at_eof = flush;
        self
    }
}

/// Outcome of one extraction run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub trajectory: Trajectory,
    pub warnings: Vec<ExtractionWarning>,
    pub lines_read: usize,
}

/// Single-pass trajectory extractor over an irace log
pub struct TrajectoryExtractor<'a> {
    mapping: &'a NameMapping,
    options: ExtractOptions,
}

impl<'a> TrajectoryExtractor<'a> {
    pub fn new(mapping: &'a NameMapping, options: ExtractOptions) -> Self {
        Self { mapping, options }
    }

    /// Extract from a log file on disk
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn extract_path<P: AsRef<Path>>(&self, path: P) -> TrajResult<Extraction> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            TrajError::io_with_path(
                format!("Failed to open irace log {:?}: {}", path, e),
                path.display().to_string(),
            )
        })?;
        self.extract(BufReader::new(file))
    }

    /// Extract from any buffered reader
    pub fn extract<R: BufRead>(&self, reader: R) -> TrajResult<Extraction> {
        let mut lines = LogLines::new(reader);
        let mut state = ScanState::new();

        while let Some((line_number, line)) = lines.next_line()? {
            let Some(marker) = Marker::detect(&line) else {
                continue;
            };

            match marker {
                Marker::WallclockTime => {
                    let value = marker.parse_value(line_number, &line)?;
                    debug!(line = line_number, value, "wallclock time");
                    state.pending.wallclock_time = Some(value);
                }
                Marker::TargetTime => {
                    let value = marker.parse_value(line_number, &line)?;
                    debug!(line = line_number, value, "target time");
                    state.pending.target_time = Some(value);
                }
                Marker::BestCost => {
                    let value = marker.parse_value(line_number, &line)?;
                    debug!(line = line_number, value, "best-so-far cost");
                    state.pending.cost = Some(value);
                }
                Marker::Description => {
                    let Some(names) = lines.next_line()? else {
                        state.truncated(line_number);
                        break;
                    };
                    let Some(values) = lines.next_line()? else {
                        state.truncated(line_number);
                        break;
                    };

                    match self.render_configuration(&names.1, &values.1) {
                        Ok(configuration) => {
                            state.pending.configuration = Some(configuration);
                            state.flush(line_number);
                        }
                        Err(identifier) => match self.options.unmapped_policy {
                            UnmappedPolicy::Fail => {
                                return Err(TrajError::unmapped_identifier(names.0, identifier));
                            }
                            UnmappedPolicy::SkipRecord => {
                                state.pending.take();
                                state.record(ExtractionWarning::UnmappedIdentifier {
                                    line: names.0,
                                    identifier,
                                });
                            }
                        },
                    }
                }
            }
        }

        state.finish(self.options.flush_at_eof);

        let extraction = Extraction {
            trajectory: state.trajectory,
            warnings: state.warnings,
            lines_read: lines.lines_read(),
        };
        info!(
            entries = extraction.trajectory.len(),
            warnings = extraction.warnings.len(),
            lines = extraction.lines_read,
            "trajectory extracted"
        );
        Ok(extraction)
    }

    /// Pair the identifier row with the value row and render `name="value"` tokens
    ///
    /// Returns the first identifier missing from the mapping as the error.
    fn render_configuration(
        &self,
        names_line: &str,
        values_line: &str,
    ) -> Result<Vec<String>, String> {
        let identifiers = table_fields(names_line);
        let values = table_fields(values_line);
        if identifiers.len() != values.len() {
            debug!(
                identifiers = identifiers.len(),
                values = values.len(),
                "description rows differ in width, pairing the common prefix"
            );
        }

        identifiers
            .into_iter()
            .zip(values)
            .filter(|(_, value)| !NOT_AVAILABLE.contains(value))
            .map(|(identifier, value)| match self.mapping.get(identifier) {
                Some(name) => Ok(format!("{}=\"{}\"", column_name(name), value.trim())),
                None => Err(identifier.to_string()),
            })
            .collect()
    }
}

/// Tokens of a description row without the two leading columns and the trailing one
fn table_fields(line: &str) -> Vec<&str> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() <= 3 {
        return Vec::new();
    }
    tokens[2..tokens.len() - 1].to_vec()
}

/// Mutable state threaded through one extraction
struct ScanState {
    pending: PendingRecord,
    next_id: u64,
    trajectory: Trajectory,
    warnings: Vec<ExtractionWarning>,
}

impl ScanState {
    fn new() -> Self {
        Self {
            pending: PendingRecord::default(),
            next_id: 1,
            trajectory: Trajectory::new(),
            warnings: Vec::new(),
        }
    }

    fn record(&mut self, warning: ExtractionWarning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Close the pending record at a description marker
    fn flush(&mut self, line: usize) {
        match self.pending.take().into_entry(self.next_id) {
            Ok(entry) => {
                debug!(
                    incumbent = entry.incumbent_id,
                    cost = entry.cost,
                    wallclock = entry.wallclock_time,
                    "incumbent recorded"
                );
                self.trajectory.push(entry);
                self.next_id += 1;
            }
            Err(record) => self.record(record.incomplete_warning(line)),
        }
    }

    fn truncated(&mut self, line: usize) {
        self.pending.take();
        self.record(ExtractionWarning::TruncatedDescription { line });
    }

    fn finish(&mut self, flush_at_eof: bool) {
        if self.pending.is_empty() {
            return;
        }
        let record = self.pending.take();
        if flush_at_eof && record.is_complete() {
            if let Ok(entry) = record.into_entry(self.next_id) {
                debug!(incumbent = entry.incumbent_id, "flushed open record at end of log");
                self.trajectory.push(entry);
                self.next_id += 1;
            }
            return;
        }
        self.record(record.dropped_warning());
    }
}
