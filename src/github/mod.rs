//! GitHub API integration module
//!
//! This module provides all GitHub data retrieval:
//! - Authenticated client construction
//! - Team name resolution
//! - Repository lookups (single, concurrent batch, per team)
//! - Paginated pull request listing
//! - Review listing
//! - Error classification

pub mod api;
pub mod client;
pub mod error_handler;
pub mod models;
pub mod pagination;
pub mod pull_request;
pub mod repository;
pub mod review;
pub mod team;

pub use api::GitHubApi;
pub use client::GitHubClient;
pub use error_handler::classify_github_error;
pub use models::{PullRequest, PullRequestState, Repository, Review, ReviewState, Team, TeamId};
pub use pagination::{FetchOptions, PageScope};
pub use pull_request::PullRequestHandler;
pub use repository::RepositoryHandler;
pub use review::ReviewHandler;
pub use team::TeamHandler;
