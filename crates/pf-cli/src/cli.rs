//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Patient-flow log auditor.
///
/// Scans hospital log files for admission and discharge events, pairs each
/// discharge with its prior admission, and prints a chronological report
/// alongside a timestamped CSV artifact.
#[derive(Debug, Parser)]
#[command(name = "pf", version, about, long_about = None)]
pub struct Cli {
    /// Log files or directories to scan; directories are searched
    /// recursively for .txt files.
    pub paths: Vec<String>,

    /// Emit the report as JSON instead of the text format.
    #[arg(long)]
    pub json: bool,

    /// Warn and skip malformed log lines instead of aborting.
    #[arg(long)]
    pub skip_malformed: bool,

    /// Base name for the report artifact.
    #[arg(long)]
    pub report_name: Option<String>,

    /// Directory the report artifact is written to.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Print the report without writing the CSV artifact.
    #[arg(long)]
    pub no_artifact: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
