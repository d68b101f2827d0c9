//! content-scaffold CLI tool

use anyhow::{Context, Result};
use clap::Parser;
use content_scaffold::observability;
use content_scaffold_cli_lib::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    observability::init(&cli.global.observability()).context("Failed to initialize logging")?;

    cli.run()
}
