//! In-progress trajectory record

use crate::types::{ExtractionWarning, TrajectoryEntry};

/// Fields collected since the last flush
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingRecord {
    pub wallclock_time: Option<f64>,
    pub cost: Option<f64>,
    /// Tracked for parity with the irace output, never emitted
    pub target_time: Option<f64>,
    pub configuration: Option<Vec<String>>,
}

impl PendingRecord {
    /// Wallclock time and cost are both known
    pub fn is_complete(&self) -> bool {
        self.wallclock_time.is_some() && self.cost.is_some()
    }

    /// Nothing has been collected yet
    pub fn is_empty(&self) -> bool {
        self.wallclock_time.is_none()
            && self.cost.is_none()
            && self.target_time.is_none()
            && self.configuration.is_none()
    }

    /// Take the collected fields, leaving an empty record behind
    pub fn take(&mut self) -> PendingRecord {
        std::mem::take(self)
    }

    /// Convert into an entry, or hand the record back if it is incomplete
    pub fn into_entry(self, incumbent_id: u64) -> Result<TrajectoryEntry, PendingRecord> {
        match (self.cost, self.wallclock_time) {
            (Some(cost), Some(wallclock_time)) => Ok(TrajectoryEntry::new(
                cost,
                wallclock_time,
                incumbent_id,
                self.configuration.unwrap_or_default(),
            )),
            _ => Err(self),
        }
    }

    pub fn incomplete_warning(self, line: usize) -> ExtractionWarning {
        ExtractionWarning::IncompleteRecord {
            line,
            wallclock_time: self.wallclock_time,
            cost: self.cost,
            configuration: self.configuration,
        }
    }

    pub fn dropped_warning(self) -> ExtractionWarning {
        ExtractionWarning::DroppedAtEndOfLog {
            wallclock_time: self.wallclock_time,
            cost: self.cost,
            configuration: self.configuration,
        }
    }
}
