//! CLI module for ghs
//!
//! This module contains all CLI command definitions and handlers using clap.

pub mod commands;
pub mod config;
pub mod single;
pub mod stats;

pub use commands::{Cli, Commands};

use secrecy::SecretString;

use crate::cli::commands::TokenArgs;
use crate::core::config::Config;
use crate::error::{GhsError, Result};
use crate::github::{FetchOptions, GitHubClient};

/// Validate the token, load the config file and build the API client
pub(crate) fn client_setup(token: TokenArgs) -> Result<(GitHubClient, FetchOptions)> {
    let token = require_token(token.api_token)?;
    let config = Config::load()?;
    let client = GitHubClient::new(&token, config.api_url.as_deref())?;
    Ok((client, config.fetch_options()))
}

fn require_token(token: Option<String>) -> Result<SecretString> {
    match token {
        Some(token) if !token.trim().is_empty() => Ok(SecretString::from(token)),
        _ => Err(GhsError::MissingToken),
    }
}

/// Shorten `s` to at most `max_len` characters, marking the cut with `…`
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
