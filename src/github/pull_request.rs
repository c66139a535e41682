//! Pull request operations

use tracing::debug;

use crate::error::Result;
use crate::github::api::GitHubApi;
use crate::github::models::PullRequest;
use crate::github::pagination::{
    collect_pages, FetchOptions, PageScope, DEFAULT_PAGE_DELAY, MAX_PAGE_SIZE,
};

/// Pull request operations handler
pub struct PullRequestHandler<'a> {
    api: &'a dyn GitHubApi,
    options: &'a FetchOptions,
}

impl<'a> PullRequestHandler<'a> {
    /// Create a new handler
    pub fn new(api: &'a dyn GitHubApi, options: &'a FetchOptions) -> Self {
        Self { api, options }
    }

    /// Fetch every pull request of a repository, newest first
    ///
    /// Walks all pages regardless of the configured page scope, pausing
    /// between requests to stay clear of GitHub's secondary rate limit.
    /// Pages are always full size and the pause never drops below
    /// [`DEFAULT_PAGE_DELAY`]; a longer configured delay is honoured.
    pub async fn list_all(&self, org: &str, repo: &str) -> Result<Vec<PullRequest>> {
        let options = FetchOptions {
            page_size: MAX_PAGE_SIZE,
            page_delay: self.options.page_delay.max(DEFAULT_PAGE_DELAY),
            ..self.options.clone()
        };

        let label = format!("{}/{}", org, repo);
        let prs = collect_pages(&label, PageScope::All, &options, |page| {
            self.api.list_pull_requests(org, repo, page)
        })
        .await?;

        debug!(repo = %label, count = prs.len(), "fetched pull requests");
        Ok(prs)
    }

    /// Get a specific pull request by number
    pub async fn get(&self, org: &str, repo: &str, number: u64) -> Result<PullRequest> {
        self.api.get_pull_request(org, repo, number).await
    }
}
