//! CLI command definitions using clap
//!
//! Defines the command structure for the `ghs` CLI tool.

use clap::{ArgGroup, Args, Parser, Subcommand};

/// ghs - GitHub Review Statistics
///
/// Displays pull request and review statistics for a repository, a list of
/// repositories, or every repository of a team.
#[derive(Parser, Debug)]
#[command(name = "ghs", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get statistics for a date window
    Stats(StatsArgs),

    /// Get details of a single pull request
    Single(SingleArgs),

    /// Inspect configuration
    Config(ConfigArgs),
}

/// API token shared by every command that talks to GitHub
#[derive(Args, Debug)]
pub struct TokenArgs {
    /// GitHub API token with repo and org scope
    #[arg(
        short = 't',
        long = "api-token",
        env = "GITHUB_TOKEN",
        hide_env_values = true
    )]
    pub api_token: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Stats Command
// ─────────────────────────────────────────────────────────────────────────────

/// Statistics over a date window
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("scope").required(true).args(["team", "repo"])))]
pub struct StatsArgs {
    /// Organization
    #[arg(long)]
    pub org: String,

    /// Team name (exact, case-sensitive)
    #[arg(long)]
    pub team: Option<String>,

    /// Repository names (may be repeated)
    #[arg(long)]
    pub repo: Vec<String>,

    /// Start of range - days from now, e.g. -14
    #[arg(short = 's', long, default_value = "-14", allow_negative_numbers = true)]
    pub start: i64,

    /// End of range - days from now, e.g. -7
    #[arg(short = 'e', long, default_value = "-1", allow_negative_numbers = true)]
    pub end: i64,

    /// Read every page of team, team repository and review listings
    #[arg(long)]
    pub all_pages: bool,

    /// Maximum concurrent repository lookups
    #[arg(long)]
    pub concurrency: Option<usize>,

    #[command(flatten)]
    pub token: TokenArgs,
}

// ─────────────────────────────────────────────────────────────────────────────
// Single Command
// ─────────────────────────────────────────────────────────────────────────────

/// Details of one pull request
#[derive(Args, Debug)]
pub struct SingleArgs {
    /// Organization
    #[arg(long)]
    pub org: String,

    /// Repository
    #[arg(long)]
    pub repo: String,

    /// PR number
    #[arg(short = 'p', long = "pr-number", value_parser = clap::value_parser!(u64).range(1..))]
    pub pr_number: u64,

    /// Read every page of the review listing
    #[arg(long)]
    pub all_pages: bool,

    #[command(flatten)]
    pub token: TokenArgs,
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the configuration file location
    Path,

    /// Print the effective configuration
    Show,
}
