//! Trajectory extraction command

use crate::console::CliConsole;
use anyhow::{Context, Result};
use irace_traj_core::{NameMapping, TrajConfig, TrajectoryExtractor, write_report};
use std::io;
use std::path::Path;

/// Extract the trajectory of `log` and write the configured report
pub fn run(log: &Path, config: &TrajConfig, console: &CliConsole) -> Result<()> {
    let mapping = NameMapping::from_path(&config.param_file).with_context(|| {
        format!(
            "failed to load parameter names from {}",
            config.param_file.display()
        )
    })?;
    console.info(&format!(
        "Loaded {} parameter names from {}",
        mapping.len(),
        config.param_file.display()
    ));

    let extraction = TrajectoryExtractor::new(&mapping, config.extract_options())
        .extract_path(log)
        .with_context(|| format!("failed to extract trajectory from {}", log.display()))?;

    let mut stdout = io::stdout().lock();
    let written = write_report(
        &extraction,
        config.output_format,
        &config.output_base,
        &mut stdout,
    )
    .context("failed to write trajectory report")?;

    if !extraction.warnings.is_empty() {
        console.warn(&format!(
            "{} section(s) of the log could not be used",
            extraction.warnings.len()
        ));
        if console.is_verbose() {
            for warning in &extraction.warnings {
                console.warn(&format!("  {}", warning));
            }
        }
    }

    if let Some(path) = written {
        console.success(&format!(
            "Wrote {} incumbent(s) to {}",
            extraction.trajectory.len(),
            path.display()
        ));
    }
    Ok(())
}
