//! Qualimeter - software quality assessment CLI
//!
//! Reads an assessment file (selected dimensions, weights, raw measurement
//! values), computes normalized quality scores per the ISO/IEC 15939
//! measurement process, and reports the results.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use qualimeter::cli;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = cli::Cli::parse();
    cli::run(cli)
}
