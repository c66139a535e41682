//! GitHub API error detection and classification
//!
//! Turns octocrab errors into the specific `GhsError` variants the CLI
//! reports to the user. Error responses are classified by HTTP status; the
//! message text only tells the primary rate limit from the secondary one.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::GhsError;

/// Matches both the primary ("API rate limit exceeded for ...") and the
/// secondary ("You have exceeded a secondary rate limit") wording
static RATE_LIMIT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(secondary )?rate limit")
        .expect("Invalid regex pattern for rate limit detection")
});

/// Classifies an octocrab error into a more specific GhsError
///
/// `resource` names what was being requested (usually the API route) and ends
/// up in the not-found and generic messages.
pub fn classify_github_error(resource: &str, err: octocrab::Error) -> GhsError {
    match err {
        octocrab::Error::GitHub { source, .. } => classify_status(
            resource,
            source.status_code.as_u16(),
            &source.message,
            source.documentation_url.as_deref(),
        ),
        octocrab::Error::Http { source, .. } => GhsError::Network(source.to_string()),
        octocrab::Error::Hyper { source, .. } => GhsError::Network(source.to_string()),
        octocrab::Error::Service { source, .. } => GhsError::Network(source.to_string()),
        octocrab::Error::Serde { source, .. } => {
            GhsError::InvalidResponse(format!("{}: {}", resource, source))
        }
        octocrab::Error::Json { source, .. } => {
            GhsError::InvalidResponse(format!("{}: {}", resource, source))
        }
        // Display of the remaining variants appends a backtrace
        other => GhsError::GitHubApi(first_line(&other.to_string()).to_string()),
    }
}

fn classify_status(
    resource: &str,
    status: u16,
    message: &str,
    documentation_url: Option<&str>,
) -> GhsError {
    if let Some(secondary) = rate_limit_kind(status, message, documentation_url) {
        return GhsError::RateLimited { secondary };
    }

    match status {
        401 => GhsError::BadCredentials,
        404 => GhsError::NotFound(resource.to_string()),
        _ => GhsError::GitHubApi(format!("{} returned {}: {}", resource, status, message)),
    }
}

/// Returns `Some(true)` for a secondary rate limit, `Some(false)` for the
/// primary one and `None` when the response is not rate-limit related
fn rate_limit_kind(status: u16, message: &str, documentation_url: Option<&str>) -> Option<bool> {
    if status != 403 && status != 429 {
        return None;
    }
    if let Some(caps) = RATE_LIMIT_PATTERN.captures(message) {
        return Some(caps.get(1).is_some());
    }
    if let Some(url) = documentation_url.filter(|url| url.contains("rate-limit")) {
        return Some(url.contains("secondary"));
    }
    // 429 is only ever sent for rate limiting
    (status == 429).then_some(false)
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default().trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_detection() {
        assert_eq!(
            rate_limit_kind(403, "API rate limit exceeded for user ID 1", None),
            Some(false)
        );
        assert_eq!(
            rate_limit_kind(403, "You have exceeded a secondary rate limit", None),
            Some(true)
        );
        assert_eq!(rate_limit_kind(429, "Too Many Requests", None), Some(false));
        assert_eq!(rate_limit_kind(403, "Resource not accessible", None), None);
    }

    #[test]
    fn test_rate_limit_needs_limit_status() {
        // rate limit wording in a 404 or 422 body is not a rate limit
        assert_eq!(rate_limit_kind(404, "rate limit docs moved", None), None);
        assert_eq!(rate_limit_kind(422, "secondary rate limit", None), None);
    }

    #[test]
    fn test_rate_limit_from_documentation_url() {
        let url = "https://docs.github.com/rest/overview/rate-limits-for-the-rest-api#about-secondary-rate-limits";
        assert_eq!(rate_limit_kind(403, "Forbidden", Some(url)), Some(true));
        let url = "https://docs.github.com/rest/rate-limit";
        assert_eq!(rate_limit_kind(403, "Forbidden", Some(url)), Some(false));
    }

    #[test]
    fn test_classify_by_status() {
        assert!(matches!(
            classify_status("/user", 401, "Bad credentials", None),
            GhsError::BadCredentials
        ));
        match classify_status("/repos/acme/missing", 404, "Not Found", None) {
            GhsError::NotFound(what) => assert_eq!(what, "/repos/acme/missing"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_not_found_text_in_other_status_is_generic() {
        let err = classify_status("/repos/acme/api", 500, "upstream 404 Not Found", None);
        match err {
            GhsError::GitHubApi(message) => {
                assert_eq!(message, "/repos/acme/api returned 500: upstream 404 Not Found")
            }
            other => panic!("expected GitHubApi, got {other:?}"),
        }
    }

    #[test]
    fn test_forbidden_without_limit_is_generic() {
        let err = classify_status("/orgs/acme/teams", 403, "Must have admin rights", None);
        assert!(matches!(err, GhsError::GitHubApi(_)));
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("Serde Error: eof\n\nFound at   0: backtrace"), "Serde Error: eof");
        assert_eq!(first_line(""), "");
    }
}
