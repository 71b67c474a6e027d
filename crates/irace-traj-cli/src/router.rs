//! Command routing logic for CLI

use crate::args::{Cli, Commands};
use crate::console::CliConsole;
use crate::{commands, logging};
use anyhow::{Context, Result, bail};
use irace_traj_core::{ConfigLoader, TrajConfig};
use std::collections::HashMap;

/// Resolve settings, set up logging and run the requested command
pub fn route(cli: Cli) -> Result<()> {
    let console = CliConsole::new(cli.verbose);
    let config = load_config(&cli)?;
    logging::init(&config.logging, cli.verbose);

    match &cli.command {
        Some(Commands::Names { .. }) => commands::names::show(&config.param_file, &console),
        None => {
            let log = cli
                .file
                .as_deref()
                .context("an irace log file is required (--file)")?;
            commands::extract::run(log, &config, &console)
        }
    }
}

/// Defaults, then the settings file, then `IRACE_TRAJ_*`, then flags
fn load_config(cli: &Cli) -> Result<TrajConfig> {
    let mut loader = ConfigLoader::new().with_defaults();
    if let Some(path) = &cli.config {
        if !path.exists() {
            bail!("config file not found: {}", path.display());
        }
        loader = loader.with_file(path);
    }

    loader
        .with_env()
        .with_args(cli_overrides(cli))
        .load()
        .context("invalid configuration")
}

fn cli_overrides(cli: &Cli) -> HashMap<String, String> {
    let mut args = HashMap::new();

    let irace_pcs = match &cli.command {
        Some(Commands::Names { irace_pcs }) => irace_pcs.as_ref(),
        None => cli.irace_pcs.as_ref(),
    };
    if let Some(path) = irace_pcs {
        args.insert("param_file".to_string(), path.display().to_string());
    }
    if let Some(output) = &cli.output {
        args.insert("output_base".to_string(), output.clone());
    }
    if let Some(format) = cli.format {
        args.insert("output_format".to_string(), format.as_str().to_string());
    }
    if cli.strict {
        args.insert("unmapped_policy".to_string(), "fail".to_string());
    }
    if cli.flush_at_eof {
        args.insert("flush_at_eof".to_string(), "true".to_string());
    }

    args
}
