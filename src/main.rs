//! prreview - pull request review service
//!
//! Binary entry point: initializes logging, then dispatches to the CLI.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = prreview::cli::Cli::parse();
    prreview::cli::run(cli)
}
