//! CLI Argument Parsing
//!
//! Both binaries run with no arguments; every flag is optional and the
//! defaults reproduce the plain behavior.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Copy the fight app's key project files into a staging directory
#[derive(Parser, Debug)]
#[command(name = "collect-context")]
#[command(author, version, about, long_about = None)]
pub struct CollectCli {
    /// Config file (defaults to ~/.config/ringside/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show what would be copied without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Emit NDJSON events instead of progress lines
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Summarize fight statuses from a JSON document on stdin
#[derive(Parser, Debug)]
#[command(name = "check-fights")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example: curl -s $API/fights | check-fights")]
pub struct CheckFightsCli {
    /// Treat missing record fields as false / "?" instead of failing (also RINGSIDE_LENIENT)
    #[arg(long)]
    pub lenient: bool,

    /// Print the report as a JSON document
    #[arg(long)]
    pub json: bool,
}
