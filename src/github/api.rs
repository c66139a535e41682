//! The GitHub operations the retrieval layer depends on
//!
//! Every fetcher talks to GitHub through [`GitHubApi`] so tests can swap in a
//! double that serves canned pages.

use async_trait::async_trait;

use crate::error::Result;
use crate::github::models::{PullRequest, Repository, Review, Team, TeamId};
use crate::github::pagination::{PageRequest, PageResult};

/// Read-only GitHub API capability
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// `GET /repos/{org}/{repo}/pulls`, all states, newest first
    async fn list_pull_requests(
        &self,
        org: &str,
        repo: &str,
        page: PageRequest,
    ) -> Result<PageResult<PullRequest>>;

    /// `GET /repos/{org}/{repo}/pulls/{number}`
    async fn get_pull_request(&self, org: &str, repo: &str, number: u64) -> Result<PullRequest>;

    /// `GET /repos/{org}/{repo}/pulls/{number}/reviews`
    async fn list_reviews(
        &self,
        org: &str,
        repo: &str,
        number: u64,
        page: PageRequest,
    ) -> Result<PageResult<Review>>;

    /// `GET /orgs/{org}/teams`
    async fn list_teams(&self, org: &str, page: PageRequest) -> Result<PageResult<Team>>;

    /// `GET /teams/{team_id}/repos`
    async fn list_team_repos(
        &self,
        team_id: TeamId,
        page: PageRequest,
    ) -> Result<PageResult<Repository>>;

    /// `GET /repos/{org}/{name}`
    async fn get_repo(&self, org: &str, name: &str) -> Result<Repository>;
}
