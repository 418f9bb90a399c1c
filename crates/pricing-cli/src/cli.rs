//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// ECS Fargate Pricing Calculator
///
/// Prices each configuration document and writes a text and a JSON report
/// per document under the output directory.
#[derive(Parser, Debug)]
#[command(name = "fargate-pricing")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The output directory (text/ and json/ subdirectories are created)
    #[arg(short, long)]
    pub output: PathBuf,

    /// A configuration file (repeat for a batch)
    #[arg(short, long, required = true, num_args = 1..)]
    pub config: Vec<PathBuf>,
}
