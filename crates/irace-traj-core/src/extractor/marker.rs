//! Line markers recognized in irace stdout

use crate::error::{TrajError, TrajResult};

/// A log line that carries trajectory information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `# wctimeUsed:` wallclock seconds consumed so far
    WallclockTime,
    /// `# timeUsed:` target-algorithm time consumed so far
    TargetTime,
    /// `Best-so-far configuration:` trailing field is the incumbent's mean cost
    BestCost,
    /// `Description of the best-so-far configuration:` followed by two table lines
    Description,
}

impl Marker {
    pub const ALL: [Marker; 4] = [
        Marker::WallclockTime,
        Marker::TargetTime,
        Marker::BestCost,
        Marker::Description,
    ];

    /// Literal line prefix of this marker
    pub fn prefix(self) -> &'static str {
        match self {
            Marker::WallclockTime => "# wctimeUsed:",
            Marker::TargetTime => "# timeUsed:",
            Marker::BestCost => "Best-so-far configuration:",
            Marker::Description => "Description of the best-so-far configuration:",
        }
    }

    /// Classify a line by prefix
    pub fn detect(line: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|marker| line.starts_with(marker.prefix()))
    }

    /// Parse the numeric field after the final `:` of a marker line
    pub fn parse_value(self, line_number: usize, line: &str) -> TrajResult<f64> {
        let field = line.rsplit(':').next().unwrap_or(line).trim();
        field
            .parse::<f64>()
            .map_err(|_| TrajError::numeric_field(line_number, self.prefix(), field))
    }
}
