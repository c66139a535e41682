//! Team name resolution

use tracing::{debug, info, warn};

use crate::error::{GhsError, Result};
use crate::github::api::GitHubApi;
use crate::github::models::TeamId;
use crate::github::pagination::{FetchOptions, PageCursor, PageScope};

/// Team operations handler
pub struct TeamHandler<'a> {
    api: &'a dyn GitHubApi,
    options: &'a FetchOptions,
}

impl<'a> TeamHandler<'a> {
    /// Create a new handler
    pub fn new(api: &'a dyn GitHubApi, options: &'a FetchOptions) -> Self {
        Self { api, options }
    }

    /// Resolve a team display name to its id
    ///
    /// The name must match exactly, including case. The first match wins.
    /// With [`PageScope::FirstPage`] only the first page of the
    /// organization's teams is searched; otherwise pages are read until a
    /// match turns up or the list runs out.
    pub async fn resolve_team_id(&self, org: &str, team_name: &str) -> Result<TeamId> {
        let mut cursor = PageCursor::new();
        let mut unread_pages = false;

        loop {
            info!("Fetching {} teams page {} ...", org, cursor);
            let page = self
                .api
                .list_teams(org, cursor.request(self.options.page_size))
                .await?;

            if let Some(team) = page.items.iter().find(|t| t.name == team_name) {
                debug!(team = %team.name, id = %team.id, "resolved team");
                return Ok(team.id);
            }

            if self.options.page_scope == PageScope::FirstPage {
                if page.has_more() {
                    warn!("{} teams has more than one page, only the first was read", org);
                    unread_pages = true;
                }
                break;
            }
            if !cursor.advance(&page) {
                break;
            }
            tokio::time::sleep(self.options.page_delay).await;
        }

        Err(GhsError::TeamNotFound {
            org: org.to_string(),
            team: team_name.to_string(),
            unread_pages,
        })
    }
}
