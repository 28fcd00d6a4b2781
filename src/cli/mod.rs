//! Command-line interface for the toolkit catalog.

use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod formatters;
pub mod output;

pub use commands::Commands;
pub use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "toolkit", version, about = "Browse and search a categorized OSINT tool catalog")]
pub struct Cli {
    /// Config file to load instead of the global and project files
    #[arg(long, global = true, env = "TOOLKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Machine-readable JSON output and JSON logs
    #[arg(long, global = true)]
    pub robot: bool,

    /// Output format (defaults to json with --robot, human otherwise)
    #[arg(long, short = 'o', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        match self.output_format {
            Some(format) => format,
            None if self.robot => OutputFormat::Json,
            None => OutputFormat::Human,
        }
    }
}
