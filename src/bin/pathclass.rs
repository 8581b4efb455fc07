//! Pathclass CLI Binary
//!
//! Command-line interface for generating directory classes.

use anyhow::Context;
use clap::Parser;
use pathclass::logging::init_logging;
use pathclass::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let project_dir =
        std::env::current_dir().context("Failed to determine the working directory")?;
    let context = CliContext::new(project_dir, cli.config.clone())
        .context("Failed to load configuration")?;

    if let Err(e) = init_logging(Some(&context.logging_config(&cli))) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let output = context.execute(&cli.command)?;
    print!("{}", output);
    Ok(())
}
