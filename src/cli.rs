// CLI module for handling command-line interface

use clap::Parser;

/// Running with no arguments installs the module into every targeted Maya version.
#[derive(Parser, Debug)]
#[command(name = "pivot-install")]
#[command(version)]
#[command(about = "Install the PivotTool module descriptor into local Maya user directories")]
pub struct Cli {
    /// Show what would be installed without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Print the install report as JSON instead of progress messages
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
