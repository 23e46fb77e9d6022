//! # ledger-effects
//!
//! Derives the effects of applied ledger operations from a JSON file. Run with `--help` to see
//! available command-line arguments.

mod cli;
pub mod config;

use clap::Parser;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    // Parse CLI args and run selected subcommand.
    let opts = Cli::parse();
    opts.run()
}
