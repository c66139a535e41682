//! Review statistics over the pull requests of a date window

use std::collections::BTreeMap;

use chrono::TimeDelta;

use crate::core::window::DateWindow;
use crate::github::models::{PullRequest, Review, ReviewState};

/// A pull request together with the reviews fetched for it
#[derive(Debug, Clone)]
pub struct PullRequestRecord {
    pub pull_request: PullRequest,
    pub reviews: Vec<Review>,
}

/// Keep the pull requests created inside `window`, preserving order
pub fn in_window(prs: Vec<PullRequest>, window: &DateWindow) -> Vec<PullRequest> {
    prs.into_iter()
        .filter(|pr| window.contains(pr.created_at))
        .collect()
}

/// Time from opening a pull request to its first submitted review
///
/// Pending reviews and reviews left by the author are not counted.
pub fn time_to_first_review(pr: &PullRequest, reviews: &[Review]) -> Option<TimeDelta> {
    reviews
        .iter()
        .filter(|r| r.state != ReviewState::Pending)
        .filter(|r| r.reviewer().is_none() || r.reviewer() != pr.author())
        .filter_map(|r| r.submitted_at)
        .min()
        .map(|first| first - pr.created_at)
}

/// Time from opening to merge, for merged pull requests
pub fn time_to_merge(pr: &PullRequest) -> Option<TimeDelta> {
    pr.merged_at.map(|merged| merged - pr.created_at)
}

/// Collected durations with mean and median
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DurationSummary {
    samples: Vec<TimeDelta>,
}

impl DurationSummary {
    pub fn push(&mut self, sample: TimeDelta) {
        self.samples.push(sample);
    }

    pub fn extend(&mut self, other: &DurationSummary) {
        self.samples.extend_from_slice(&other.samples);
    }

    pub fn mean(&self) -> Option<TimeDelta> {
        if self.samples.is_empty() {
            return None;
        }
        let total: i64 = self.samples.iter().map(|d| d.num_seconds()).sum();
        Some(TimeDelta::seconds(total / self.samples.len() as i64))
    }

    pub fn median(&self) -> Option<TimeDelta> {
        if self.samples.is_empty() {
            return None;
        }
        let mut sorted = self.samples.clone();
        sorted.sort();
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            let secs = (sorted[mid - 1].num_seconds() + sorted[mid].num_seconds()) / 2;
            Some(TimeDelta::seconds(secs))
        } else {
            Some(sorted[mid])
        }
    }
}

/// Statistics for one repository, or the total over several
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepoStats {
    pub repo: String,
    pub opened: usize,
    pub merged: usize,
    pub abandoned: usize,
    pub still_open: usize,
    pub reviewed: usize,
    pub first_review: DurationSummary,
    pub merge: DurationSummary,
    pub reviews_by_reviewer: BTreeMap<String, usize>,
}

impl RepoStats {
    pub fn compute(repo: &str, records: &[PullRequestRecord]) -> Self {
        let mut stats = RepoStats {
            repo: repo.to_string(),
            ..RepoStats::default()
        };

        for record in records {
            let pr = &record.pull_request;
            stats.opened += 1;
            if pr.is_merged() {
                stats.merged += 1;
            } else if pr.is_abandoned() {
                stats.abandoned += 1;
            } else {
                stats.still_open += 1;
            }

            if let Some(wait) = time_to_first_review(pr, &record.reviews) {
                stats.reviewed += 1;
                stats.first_review.push(wait);
            }
            if let Some(merge) = time_to_merge(pr) {
                stats.merge.push(merge);
            }

            for review in &record.reviews {
                if review.state == ReviewState::Pending {
                    continue;
                }
                if let Some(login) = review.reviewer() {
                    if Some(login) != pr.author() {
                        *stats.reviews_by_reviewer.entry(login.to_string()).or_default() += 1;
                    }
                }
            }
        }

        stats
    }

    /// Sum of several repositories' statistics
    pub fn total<'a>(all: impl IntoIterator<Item = &'a RepoStats>) -> Self {
        let mut total = RepoStats {
            repo: "total".to_string(),
            ..RepoStats::default()
        };
        for stats in all {
            total.opened += stats.opened;
            total.merged += stats.merged;
            total.abandoned += stats.abandoned;
            total.still_open += stats.still_open;
            total.reviewed += stats.reviewed;
            total.first_review.extend(&stats.first_review);
            total.merge.extend(&stats.merge);
            for (login, count) in &stats.reviews_by_reviewer {
                *total.reviews_by_reviewer.entry(login.clone()).or_default() += count;
            }
        }
        total
    }
}

/// Format a duration compactly (e.g. "2d 4h", "3h 12m", "45m")
pub fn format_duration(duration: TimeDelta) -> String {
    let secs = duration.num_seconds().max(0);
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
    }
}
