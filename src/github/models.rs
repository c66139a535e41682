//! Records returned by the GitHub API
//!
//! Only the fields the statistics consume are deserialized; everything else
//! in the response bodies is ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Numeric team identifier used for team-scoped queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u64);

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user or organization account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    pub login: String,
}

/// A repository, identified by owner and name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: Account,
}

impl Repository {
    /// Organization or user owning the repository
    pub fn owner_login(&self) -> &str {
        &self.owner.login
    }
}

/// A team within an organization
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// Display name, matched exactly by the team resolver
    pub name: String,
    pub slug: String,
}

/// Pull request state as reported by the list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestState {
    Open,
    Closed,
}

/// A pull request snapshot
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub user: Option<Account>,
    pub state: PullRequestState,
    #[serde(default)]
    pub draft: bool,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub merged_at: Option<DateTime<Utc>>,
    pub html_url: Option<String>,
}

impl PullRequest {
    /// Login of the author, if the account still exists
    pub fn author(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.login.as_str())
    }

    pub fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }

    /// Closed without being merged
    pub fn is_abandoned(&self) -> bool {
        self.state == PullRequestState::Closed && self.merged_at.is_none()
    }
}

/// Verdict attached to a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    Approved,
    ChangesRequested,
    Commented,
    Dismissed,
    Pending,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ReviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approved => write!(f, "approved"),
            Self::ChangesRequested => write!(f, "changes requested"),
            Self::Commented => write!(f, "commented"),
            Self::Dismissed => write!(f, "dismissed"),
            Self::Pending => write!(f, "pending"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A review on exactly one pull request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Review {
    pub id: u64,
    pub user: Option<Account>,
    pub state: ReviewState,
    /// Absent while the review is still pending
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Review {
    pub fn reviewer(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.login.as_str())
    }
}
