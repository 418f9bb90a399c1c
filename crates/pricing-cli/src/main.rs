//! Fargate pricing calculator CLI
//!
//! Prices a batch of YAML configuration documents against the combination
//! catalog and writes per-document text and JSON reports.

mod cli;
mod commands;
mod error;
mod loader;

use clap::Parser;
use colored::Colorize;
use pricing_core::Catalog;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    // The catalog is built once and shared read-only across the batch.
    let catalog = Catalog::standard();
    commands::run(&catalog, &cli.output, &cli.config)
}
