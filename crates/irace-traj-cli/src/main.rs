//! irace trajectory extraction CLI
//!
//! Reads the stdout log of an irace run together with the irace parameter
//! file and writes the incumbent trajectory table.
//!
//! ```bash
//! irace-traj -f irace.stdout -p paramfile.irace -o traj_irace
//! irace-traj -f irace.stdout --format table
//! irace-traj names -p paramfile.irace
//! ```
//!
//! Set `RUST_LOG=debug` to trace every marker line the extractor consumes.

mod args;
mod commands;
mod console;
mod logging;
mod router;

use args::Cli;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    match router::route(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            console::CliConsole::new(verbose).error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
