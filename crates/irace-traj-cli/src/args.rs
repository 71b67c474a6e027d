//! CLI argument definitions using clap
//!
//! - irace-traj -f <log>               # extract with defaults
//! - irace-traj -f <log> -p <pcs> -o x # custom parameter file and output base
//! - irace-traj names                  # show the parameter name mapping

use clap::{Parser, Subcommand, ValueEnum};
use irace_traj_core::ReportFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "irace-traj")]
#[command(about = "Extract the incumbent trajectory from an irace stdout log")]
#[command(version)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Output log file of irace (stdout)
    #[arg(short = 'f', long = "file", required = true)]
    pub file: Option<PathBuf>,

    /// irace parameter file [default: paramfile.irace]
    #[arg(short = 'p', long = "irace-pcs", visible_alias = "irace_pcs")]
    pub irace_pcs: Option<PathBuf>,

    /// Output base name; the table is written to <BASE>_wc.csv [default: traj_irace]
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Fail when a configuration uses an identifier missing from the parameter file
    #[arg(long)]
    pub strict: bool,

    /// Keep a complete record that is still open when the log ends
    #[arg(long)]
    pub flush_at_eof: bool,

    /// Settings file (JSON, TOML or YAML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show how irace parameter identifiers map to original names
    Names {
        /// irace parameter file [default: paramfile.irace]
        #[arg(short = 'p', long = "irace-pcs", visible_alias = "irace_pcs")]
        irace_pcs: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Csv,
    Json,
    Table,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ReportFormat::Csv,
            FormatArg::Json => ReportFormat::Json,
            FormatArg::Table => ReportFormat::Table,
        }
    }
}

impl FormatArg {
    pub fn as_str(self) -> &'static str {
        match self {
            FormatArg::Csv => "csv",
            FormatArg::Json => "json",
            FormatArg::Table => "table",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_file_is_required() {
        assert!(Cli::try_parse_from(["irace-traj"]).is_err());
    }

    #[test]
    fn test_script_compatible_flags() {
        let cli = Cli::try_parse_from([
            "irace-traj",
            "-f",
            "irace.log",
            "--irace_pcs",
            "params.irace",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("irace.log")));
        assert_eq!(cli.irace_pcs, Some(PathBuf::from("params.irace")));
        assert!(cli.output.is_none());
        assert!(!cli.strict);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "irace-traj",
            "--file",
            "irace.log",
            "-o",
            "out/run1",
            "--format",
            "json",
            "--strict",
            "--flush-at-eof",
        ])
        .unwrap();
        assert_eq!(cli.output.as_deref(), Some("out/run1"));
        assert_eq!(cli.format, Some(FormatArg::Json));
        assert!(cli.strict);
        assert!(cli.flush_at_eof);
    }

    #[test]
    fn test_names_subcommand_needs_no_log() {
        let cli = Cli::try_parse_from(["irace-traj", "names", "-p", "x.irace"]).unwrap();
        assert!(cli.file.is_none());
        match cli.command {
            Some(Commands::Names { irace_pcs }) => {
                assert_eq!(irace_pcs, Some(PathBuf::from("x.irace")))
            }
            None => panic!("Expected names subcommand"),
        }
    }

    #[test]
    fn test_format_arg_conversion() {
        assert_eq!(ReportFormat::from(FormatArg::Table), ReportFormat::Table);
        assert_eq!(
            ReportFormat::from_str(FormatArg::Json.as_str()),
            Some(ReportFormat::Json)
        );
    }
}
