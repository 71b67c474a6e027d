//! Terminal table summary

use super::format_float;
use crate::extractor::Extraction;

/// Fixed-width table for reading a trajectory in a terminal
pub struct TableReporter;

impl TableReporter {
    pub fn generate(extraction: &Extraction) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{:=<70}\n", "= irace Trajectory "));
        output.push_str(&format!(
            "Incumbents: {} | Warnings: {} | Log lines: {}\n",
            extraction.trajectory.len(),
            extraction.warnings.len(),
            extraction.lines_read
        ));
        output.push_str(&format!("{:=<70}\n\n", ""));

        output.push_str(&format!(
            "{:>4} {:>14} {:>14}  {}\n",
            "ID", "Cost", "Wallclock", "Configuration"
        ));
        output.push_str(&format!("{:-<70}\n", ""));

        for entry in &extraction.trajectory {
            output.push_str(&format!(
                "{:>4} {:>14} {:>14}  {}\n",
                entry.incumbent_id,
                format_float(entry.cost),
                format_float(entry.wallclock_time),
                entry.configuration.join(" ")
            ));
        }

        if !extraction.warnings.is_empty() {
            output.push_str(&format!("{:-<70}\n", ""));
            output.push_str("WARNINGS\n");
            for warning in &extraction.warnings {
                output.push_str(&format!("  {}\n", warning));
            }
        }

        output.push_str(&format!("{:=<70}\n", ""));
        output
    }
}
