pub mod check;

use crate::errors::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "indexwise",
    version,
    about = "Closest-index import checker for JavaScript/TypeScript"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a source tree for import violations
    Check(check::CheckArgs),
}

/// Dispatch to the appropriate command handler. Returns the number of
/// findings so the binary can derive its exit status.
pub fn dispatch(cli: Cli) -> Result<usize> {
    match cli.command {
        Commands::Check(args) => check::run(&args),
    }
}
