//! StoreHouse CLI - console demo driver for the catalog model.
//!
//! Replays a full warehouse session against the process-wide registry:
//! product construction (including rejected values), categories, stores,
//! placements, stock, and listings.

mod demo;
mod output;

use anyhow::Result;
use clap::Parser;
use output::Output;
use tracing_subscriber::EnvFilter;

/// StoreHouse - exercise the in-memory retail catalog
#[derive(Parser)]
#[command(name = "storehouse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let out = Output::new(cli.json);
    demo::run(&out)
}
