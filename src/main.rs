//! ghs - GitHub Review Statistics
//!
//! Pull request and review statistics for the repositories of an
//! organization or team.
//!
//! Available as the `ghs` command.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ghs::cli::commands::{Cli, Commands};
use ghs::cli::{config, single, stats};
use ghs::error::Result;

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ghs=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats(args) => stats::handle_stats(args).await,
        Commands::Single(args) => single::handle_single(args).await,
        Commands::Config(args) => config::handle_config(args.command),
    }
}
