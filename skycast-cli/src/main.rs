//! Binary crate for the `skycast` terminal weather display.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive search-and-display session
//! - Human-friendly rendering of the weather card

use clap::Parser;

mod cli;
mod render;
mod session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
