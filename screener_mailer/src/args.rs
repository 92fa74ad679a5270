//! Command-line arguments for the screener mailer.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Render the report and print it to stdout instead of sending mail.
    #[clap(long)]
    pub dry_run: bool,
}
