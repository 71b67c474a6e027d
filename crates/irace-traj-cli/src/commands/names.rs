//! Parameter name mapping inspection

use crate::console::CliConsole;
use anyhow::{Context, Result};
use irace_traj_core::NameMapping;
use irace_traj_core::mapping::column_name;
use std::path::Path;

/// Print every identifier with the name it renders to in the trajectory
pub fn show(param_file: &Path, console: &CliConsole) -> Result<()> {
    let mapping = NameMapping::from_path(param_file)
        .with_context(|| format!("failed to load parameter names from {}", param_file.display()))?;

    console.print_header(&format!("Parameters in {}", param_file.display()));
    if mapping.is_empty() {
        println!("(no parameters)");
        return Ok(());
    }

    let width = mapping.iter().map(|(id, _)| id.len()).max().unwrap_or(0);
    println!("{:<width$}  {:<30}  {}", "ID", "Original name", "Column name");
    for (id, name) in mapping.iter() {
        println!("{:<width$}  {:<30}  {}", id, name, column_name(name));
    }
    Ok(())
}
