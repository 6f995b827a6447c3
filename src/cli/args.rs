// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Every flag is optional so a bare invocation checks the current repository

use clap::Parser;
use std::path::PathBuf;

use crate::report::ReportFormat;

#[derive(Parser, Debug)]
#[command(name = "yaml-fmt")]
#[command(about = "Check that every git-tracked YAML file parses")]
#[command(version)]
pub struct Args {
    #[arg(
        short = 'C',
        long = "repo",
        default_value = ".",
        help = "Repository root to list and check files in"
    )]
    pub repo: PathBuf,

    #[arg(short, long, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text, help = "Output format")]
    pub format: ReportFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
