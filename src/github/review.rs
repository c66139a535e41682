//! Review operations

use crate::error::Result;
use crate::github::api::GitHubApi;
use crate::github::models::Review;
use crate::github::pagination::{collect_pages, FetchOptions};

/// Review operations handler
pub struct ReviewHandler<'a> {
    api: &'a dyn GitHubApi,
    options: &'a FetchOptions,
}

impl<'a> ReviewHandler<'a> {
    /// Create a new handler
    pub fn new(api: &'a dyn GitHubApi, options: &'a FetchOptions) -> Self {
        Self { api, options }
    }

    /// List the reviews of one pull request
    ///
    /// Reads the first page only unless the page scope says otherwise, so a
    /// pull request with more reviews than fit on one page is under-reported.
    pub async fn list(&self, org: &str, repo: &str, number: u64) -> Result<Vec<Review>> {
        let label = format!("{}/{}#{} reviews", org, repo, number);
        collect_pages(&label, self.options.page_scope, self.options, |page| {
            self.api.list_reviews(org, repo, number, page)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::GhsError;
    use crate::github::api::MockGitHubApi;
    use crate::github::models::{Account, ReviewState};
    use crate::github::pagination::{PageResult, PageScope};

    fn review(id: u64, login: &str) -> Review {
        Review {
            id,
            user: Some(Account {
                login: login.to_string(),
            }),
            state: ReviewState::Approved,
            submitted_at: None,
        }
    }

    fn options(scope: PageScope) -> FetchOptions {
        FetchOptions {
            page_delay: Duration::ZERO,
            page_scope: scope,
            ..FetchOptions::default()
        }
    }

    #[tokio::test]
    async fn test_no_reviews_is_empty() {
        let mut api = MockGitHubApi::new();
        api.expect_list_reviews()
            .withf(|org, repo, number, page| {
                org == "acme" && repo == "api" && *number == 12 && page.page == 1
            })
            .times(1)
            .returning(|_, _, _, _| Ok(PageResult::last(vec![])));

        let opts = options(PageScope::FirstPage);
        let reviews = ReviewHandler::new(&api, &opts)
            .list("acme", "api", 12)
            .await
            .unwrap();
        assert!(reviews.is_empty());
    }

    #[tokio::test]
    async fn test_first_page_only_by_default() {
        let mut api = MockGitHubApi::new();
        api.expect_list_reviews().times(1).returning(|_, _, _, _| {
            Ok(PageResult {
                items: vec![review(1, "alice"), review(2, "bob")],
                next_page: Some(2),
                last_page: Some(4),
            })
        });

        let opts = options(PageScope::FirstPage);
        let reviews = ReviewHandler::new(&api, &opts)
            .list("acme", "api", 12)
            .await
            .unwrap();
        assert_eq!(reviews.len(), 2);
    }

    #[tokio::test]
    async fn test_all_pages_scope_follows_links() {
        let mut api = MockGitHubApi::new();
        api.expect_list_reviews()
            .times(2)
            .returning(|_, _, _, page| {
                Ok(match page.page {
                    1 => PageResult {
                        items: vec![review(1, "alice")],
                        next_page: Some(2),
                        last_page: Some(2),
                    },
                    _ => PageResult::last(vec![review(2, "bob")]),
                })
            });

        let opts = options(PageScope::All);
        let reviews = ReviewHandler::new(&api, &opts)
            .list("acme", "api", 12)
            .await
            .unwrap();
        let ids: Vec<u64> = reviews.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_error_propagates() {
        let mut api = MockGitHubApi::new();
        api.expect_list_reviews()
            .returning(|_, _, _, _| Err(GhsError::GitHubApi("timeout".to_string())));

        let opts = options(PageScope::FirstPage);
        let result = ReviewHandler::new(&api, &opts).list("acme", "api", 12).await;
        assert!(matches!(result, Err(GhsError::GitHubApi(_))));
    }
}
