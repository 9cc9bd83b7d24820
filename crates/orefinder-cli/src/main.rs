//! # orefinder
//!
//! Command-line entry point for the deposit finder. Reports are written to
//! stdout as JSON; logs go to stderr.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod cli;
mod config;
mod report;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::Cli;

/// Main entry point.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("orefinder=info".parse()?))
        .init();

    debug!("orefinder {}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = cli.load_config();
    cli.run(&config, &mut std::io::stdout().lock())
}
