//! Single pull request CLI command handler

use chrono::{DateTime, Utc};

use crate::cli::client_setup;
use crate::cli::commands::SingleArgs;
use crate::core::stats::{format_duration, time_to_first_review, time_to_merge};
use crate::error::Result;
use crate::github::{PageScope, PullRequest, PullRequestHandler, Review, ReviewHandler};

/// Handle the single command
pub async fn handle_single(args: SingleArgs) -> Result<()> {
    let (client, mut options) = client_setup(args.token)?;
    if args.all_pages {
        options.page_scope = PageScope::All;
    }

    let pr = PullRequestHandler::new(&client, &options)
        .get(&args.org, &args.repo, args.pr_number)
        .await?;
    let reviews = ReviewHandler::new(&client, &options)
        .list(&args.org, &args.repo, args.pr_number)
        .await?;

    print_details(&pr, &reviews);
    Ok(())
}

fn print_details(pr: &PullRequest, reviews: &[Review]) {
    let draft = if pr.draft { " [DRAFT]" } else { "" };
    println!("#{} {}{}", pr.number, pr.title, draft);
    println!("State:   {}", state_label(pr));
    println!("Author:  @{}", pr.author().unwrap_or("ghost"));
    println!("Created: {}", format_time(pr.created_at));

    if let Some(merged) = pr.merged_at {
        println!("Merged:  {}", format_time(merged));
    } else if let Some(closed) = pr.closed_at {
        println!("Closed:  {}", format_time(closed));
    }
    if let Some(merge) = time_to_merge(pr) {
        println!("Time to merge:        {}", format_duration(merge));
    }
    match time_to_first_review(pr, reviews) {
        Some(wait) => println!("Time to first review: {}", format_duration(wait)),
        None => println!("Time to first review: -"),
    }

    if reviews.is_empty() {
        println!("\nNo reviews.");
    } else {
        println!("\n─── Reviews ({}) ───", reviews.len());
        for review in reviews {
            let when = review
                .submitted_at
                .map(format_time)
                .unwrap_or_else(|| "not submitted".to_string());
            println!(
                "  @{:<20} {:<18} {}",
                review.reviewer().unwrap_or("ghost"),
                review.state.to_string(),
                when
            );
        }
    }

    if let Some(url) = &pr.html_url {
        println!("\nURL: {}", url);
    }
}

fn state_label(pr: &PullRequest) -> &'static str {
    if pr.is_merged() {
        "merged"
    } else if pr.is_abandoned() {
        "closed"
    } else {
        "open"
    }
}

fn format_time(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}
