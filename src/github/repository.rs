//! Repository resolution: single lookup, batch lookup, team listing

use futures::stream::{self, StreamExt};
use tracing::{debug, info};

use crate::error::Result;
use crate::github::api::GitHubApi;
use crate::github::models::Repository;
use crate::github::pagination::{collect_pages, FetchOptions};
use crate::github::team::TeamHandler;

/// Repository operations handler
pub struct RepositoryHandler<'a> {
    api: &'a dyn GitHubApi,
    options: &'a FetchOptions,
}

impl<'a> RepositoryHandler<'a> {
    /// Create a new handler
    pub fn new(api: &'a dyn GitHubApi, options: &'a FetchOptions) -> Self {
        Self { api, options }
    }

    /// Look up a single repository
    pub async fn get(&self, org: &str, name: &str) -> Result<Repository> {
        debug!(org, name, "fetching repository");
        self.api.get_repo(org, name).await
    }

    /// Look up several repositories concurrently
    ///
    /// At most `max_concurrency` lookups are in flight at once. Each result
    /// lands in the slot of its input index, so the returned list follows
    /// `names` whatever order the lookups finish in. The first failure is
    /// returned immediately and no further lookups are started.
    pub async fn get_many(&self, org: &str, names: &[String]) -> Result<Vec<Repository>> {
        let width = self.options.max_concurrency.max(1);
        info!("Fetching {} repositories from {} ({} at a time) ...", names.len(), org, width);

        let mut slots: Vec<Option<Repository>> = vec![None; names.len()];
        let mut lookups = stream::iter(names.iter().enumerate())
            .map(|(index, name)| async move { (index, self.get(org, name).await) })
            .buffer_unordered(width);

        while let Some((index, result)) = lookups.next().await {
            slots[index] = Some(result?);
        }

        Ok(slots.into_iter().flatten().collect())
    }

    /// List the repositories of a team, resolving the team name first
    pub async fn team_repos(&self, org: &str, team: &str) -> Result<Vec<Repository>> {
        let team_id = TeamHandler::new(self.api, self.options)
            .resolve_team_id(org, team)
            .await?;

        let label = format!("{}/{} repositories", org, team);
        collect_pages(&label, self.options.page_scope, self.options, |page| {
            self.api.list_team_repos(team_id, page)
        })
        .await
    }
}
