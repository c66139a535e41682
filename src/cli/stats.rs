//! Stats CLI command handler

use tracing::info;

use crate::cli::commands::StatsArgs;
use crate::cli::{client_setup, truncate};
use crate::core::stats::{self, format_duration, DurationSummary, PullRequestRecord, RepoStats};
use crate::core::window::DateWindow;
use crate::error::Result;
use crate::github::{
    FetchOptions, GitHubApi, PageScope, PullRequestHandler, Repository, RepositoryHandler,
    ReviewHandler,
};

/// Handle the stats command
pub async fn handle_stats(args: StatsArgs) -> Result<()> {
    let window = DateWindow::from_offsets(args.start, args.end)?;
    let (client, mut options) = client_setup(args.token)?;

    if args.all_pages {
        options.page_scope = PageScope::All;
    }
    if let Some(width) = args.concurrency {
        options.max_concurrency = width.max(1);
    }

    let repos = resolve_repos(&client, &options, &args.org, args.team.as_deref(), &args.repo).await?;
    info!("Collecting statistics for {} repositories", repos.len());

    let mut all_stats = Vec::with_capacity(repos.len());
    for repo in &repos {
        let records = collect_records(&client, &options, repo, &window).await?;
        all_stats.push(RepoStats::compute(&repo.full_name, &records));
    }

    print_report(&args.org, &window, &all_stats);
    Ok(())
}

/// Resolve the repositories a stats run covers
///
/// A team lists its repositories, a single `--repo` is a plain lookup and
/// several are looked up concurrently.
pub async fn resolve_repos(
    api: &dyn GitHubApi,
    options: &FetchOptions,
    org: &str,
    team: Option<&str>,
    names: &[String],
) -> Result<Vec<Repository>> {
    let handler = RepositoryHandler::new(api, options);
    match (team, names) {
        (Some(team), _) => handler.team_repos(org, team).await,
        (None, [name]) => Ok(vec![handler.get(org, name).await?]),
        (None, names) => handler.get_many(org, names).await,
    }
}

/// Fetch the pull requests of `repo` created inside `window`, each with its
/// reviews
pub async fn collect_records(
    api: &dyn GitHubApi,
    options: &FetchOptions,
    repo: &Repository,
    window: &DateWindow,
) -> Result<Vec<PullRequestRecord>> {
    let owner = repo.owner_login();
    let prs = PullRequestHandler::new(api, options)
        .list_all(owner, &repo.name)
        .await?;
    let selected = stats::in_window(prs, window);

    let reviews = ReviewHandler::new(api, options);
    let mut records = Vec::with_capacity(selected.len());
    for pr in selected {
        let pr_reviews = reviews.list(owner, &repo.name, pr.number).await?;
        records.push(PullRequestRecord {
            pull_request: pr,
            reviews: pr_reviews,
        });
    }

    Ok(records)
}

fn print_report(org: &str, window: &DateWindow, all_stats: &[RepoStats]) {
    println!("Review statistics for {} ({})\n", org, window);

    if all_stats.is_empty() {
        println!("No repositories found.");
        return;
    }

    println!(
        "  {:<30}  {:>6}  {:>6}  {:>6}  {:>4}  {:>8}  {:>20}  {:>20}",
        "REPOSITORY", "OPENED", "MERGED", "CLOSED", "OPEN", "REVIEWED", "FIRST REVIEW avg/med", "MERGE avg/med"
    );
    println!("  {}", "-".repeat(120));

    for stats in all_stats {
        print_row(stats);
    }

    let total = RepoStats::total(all_stats);
    if all_stats.len() > 1 {
        println!("  {}", "-".repeat(120));
        print_row(&total);
    }

    if !total.reviews_by_reviewer.is_empty() {
        println!("\nReviews per reviewer:\n");
        let mut reviewers: Vec<_> = total.reviews_by_reviewer.iter().collect();
        reviewers.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (login, count) in reviewers {
            println!("  @{:<30} {:>5}", login, count);
        }
    }
}

fn print_row(stats: &RepoStats) {
    println!(
        "  {:<30}  {:>6}  {:>6}  {:>6}  {:>4}  {:>8}  {:>20}  {:>20}",
        truncate(&stats.repo, 30),
        stats.opened,
        stats.merged,
        stats.abandoned,
        stats.still_open,
        stats.reviewed,
        summary_cell(&stats.first_review),
        summary_cell(&stats.merge)
    );
}

fn summary_cell(summary: &DurationSummary) -> String {
    match (summary.mean(), summary.median()) {
        (Some(mean), Some(median)) => {
            format!("{} / {}", format_duration(mean), format_duration(median))
        }
        _ => "-".to_string(),
    }
}
