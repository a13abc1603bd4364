//! Binary crate for the `citycast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration and search session
//! - Human-friendly rendering of the published search state

use clap::Parser;

mod cli;
mod logging;
mod render;
mod repl;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    logging::init_tracing(cmd.verbose);
    cmd.run().await
}
