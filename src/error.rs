//! Custom error types for ghs
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

/// Main error type for the ghs application
#[derive(Error, Debug)]
pub enum GhsError {
    /// No API token was supplied
    #[error("No GitHub API token provided.\n\n  → Pass one with '--api-token' or set the GITHUB_TOKEN environment variable.\n  → The token needs 'repo' and 'read:org' scopes.")]
    MissingToken,

    /// The token was rejected by GitHub
    #[error("GitHub rejected the API token (bad credentials).\n\n  → Check that the token has not expired or been revoked.")]
    BadCredentials,

    /// Secondary or primary rate limit hit
    #[error("GitHub API {} rate limit exceeded.\n\n  → Wait a few minutes and try again.\n  → Raise 'page_delay_secs' or lower 'max_concurrency' in the config file.", limit_kind(.secondary))]
    RateLimited { secondary: bool },

    /// Resource does not exist or is not visible to the token
    #[error("GitHub resource not found: {0}\n\n  → It may be private or your token may not have access.")]
    NotFound(String),

    /// GitHub answered with an error status
    #[error("GitHub API request failed: {0}")]
    GitHubApi(String),

    /// The request never got an answer
    #[error("Could not reach GitHub: {0}\n\n  → Check your internet connection.")]
    Network(String),

    /// GitHub answered but the body could not be decoded
    #[error("Unexpected response from GitHub: {0}")]
    InvalidResponse(String),

    /// No team with this exact name in the organization
    #[error("Team '{team}' not found in organization '{org}'.\n\n  → Team names are matched exactly, including case.{}", unread_pages_hint(.unread_pages))]
    TeamNotFound {
        org: String,
        team: String,
        unread_pages: bool,
    },

    /// Pull request not found
    #[error("Pull request #{number} does not exist in '{org}/{repo}'.")]
    PullRequestNotFound {
        org: String,
        repo: String,
        number: u64,
    },

    /// Start of the date window lies after its end
    #[error("Invalid date window: start ({start}) must not be after end ({end}).\n\n  → Example: --start -14 --end -1")]
    InvalidWindow { start: i64, end: i64 },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),
}

impl From<toml::de::Error> for GhsError {
    fn from(err: toml::de::Error) -> Self {
        GhsError::Toml(err.to_string())
    }
}

impl From<octocrab::Error> for GhsError {
    fn from(err: octocrab::Error) -> Self {
        crate::github::error_handler::classify_github_error("GitHub API", err)
    }
}

fn limit_kind(secondary: &bool) -> &'static str {
    if *secondary {
        "secondary"
    } else {
        "primary"
    }
}

fn unread_pages_hint(unread_pages: &bool) -> &'static str {
    if *unread_pages {
        "\n  → Only the first page of teams was searched. Pass '--all-pages' to search them all."
    } else {
        ""
    }
}

/// Result type alias using GhsError
pub type Result<T> = std::result::Result<T, GhsError>;
