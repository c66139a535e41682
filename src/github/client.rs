//! GitHub API client wrapper using octocrab

use async_trait::async_trait;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::{Octocrab, Page};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{GhsError, Result};
use crate::github::api::GitHubApi;
use crate::github::error_handler::classify_github_error;
use crate::github::models::{PullRequest, Repository, Review, Team, TeamId};
use crate::github::pagination::{page_param, PageRequest, PageResult};

/// Query string of a plain page request
#[derive(Debug, Serialize)]
struct PageQuery {
    per_page: u8,
    page: u32,
}

impl From<PageRequest> for PageQuery {
    fn from(req: PageRequest) -> Self {
        Self {
            per_page: req.per_page,
            page: req.page,
        }
    }
}

/// Query string of the pull request listing: every state, newest first
#[derive(Debug, Serialize)]
struct PullsQuery {
    state: &'static str,
    sort: &'static str,
    direction: &'static str,
    per_page: u8,
    page: u32,
}

impl From<PageRequest> for PullsQuery {
    fn from(req: PageRequest) -> Self {
        Self {
            state: "all",
            sort: "created",
            direction: "desc",
            per_page: req.per_page,
            page: req.page,
        }
    }
}

/// GitHub API client wrapper
///
/// Holds only the token and connection configuration, so one instance is
/// shared read-only by every concurrent request of an invocation.
pub struct GitHubClient {
    /// The octocrab instance
    inner: Octocrab,
}

impl GitHubClient {
    /// Create a client that sends `token` as bearer credentials on every
    /// request
    ///
    /// `api_url` points the client at a GitHub Enterprise instance instead of
    /// api.github.com. No request is made here; a bad token only surfaces on
    /// first use. Octocrab's retry layer is switched off: failed requests are
    /// reported, never repeated.
    pub fn new(token: &SecretString, api_url: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder()
            .personal_token(token.expose_secret().to_string())
            .add_retry_config(RetryConfig::None);

        if let Some(url) = api_url {
            builder = builder.base_uri(url.to_string())?;
        }

        Ok(Self {
            inner: builder.build()?,
        })
    }

    async fn get_one<T, Q>(&self, route: &str, query: Option<&Q>) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        debug!(route, "GET");
        self.inner
            .get::<T, _, _>(route, query)
            .await
            .map_err(|err| classify_github_error(route, err))
    }

    async fn get_page<T, Q>(&self, route: &str, query: &Q) -> Result<PageResult<T>>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        debug!(route, "GET page");
        let page = self
            .inner
            .get::<Page<T>, _, _>(route, Some(query))
            .await
            .map_err(|err| classify_github_error(route, err))?;

        Ok(PageResult {
            next_page: page.next.as_ref().and_then(|u| u.query()).and_then(page_param),
            last_page: page.last.as_ref().and_then(|u| u.query()).and_then(page_param),
            items: page.items,
        })
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn list_pull_requests(
        &self,
        org: &str,
        repo: &str,
        page: PageRequest,
    ) -> Result<PageResult<PullRequest>> {
        let route = format!("/repos/{}/{}/pulls", org, repo);
        self.get_page(&route, &PullsQuery::from(page)).await
    }

    async fn get_pull_request(&self, org: &str, repo: &str, number: u64) -> Result<PullRequest> {
        let route = format!("/repos/{}/{}/pulls/{}", org, repo, number);
        match self.get_one(&route, None::<&()>).await {
            Err(GhsError::NotFound(_)) => Err(GhsError::PullRequestNotFound {
                org: org.to_string(),
                repo: repo.to_string(),
                number,
            }),
            other => other,
        }
    }

    async fn list_reviews(
        &self,
        org: &str,
        repo: &str,
        number: u64,
        page: PageRequest,
    ) -> Result<PageResult<Review>> {
        let route = format!("/repos/{}/{}/pulls/{}/reviews", org, repo, number);
        self.get_page(&route, &PageQuery::from(page)).await
    }

    async fn list_teams(&self, org: &str, page: PageRequest) -> Result<PageResult<Team>> {
        let route = format!("/orgs/{}/teams", org);
        self.get_page(&route, &PageQuery::from(page)).await
    }

    async fn list_team_repos(
        &self,
        team_id: TeamId,
        page: PageRequest,
    ) -> Result<PageResult<Repository>> {
        let route = format!("/teams/{}/repos", team_id);
        self.get_page(&route, &PageQuery::from(page)).await
    }

    async fn get_repo(&self, org: &str, name: &str) -> Result<Repository> {
        let route = format!("/repos/{}/{}", org, name);
        self.get_one(&route, None::<&()>).await
    }
}
