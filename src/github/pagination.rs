//! Page-number pagination over GitHub list endpoints
//!
//! GitHub list endpoints take `page` and `per_page` query parameters and
//! advertise the next and last page numbers in the `Link` response header.
//! [`PageCursor`] tracks the walk, [`collect_pages`] drives it.

use std::future::Future;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::Result;

/// GitHub caps `per_page` at 100
pub const MAX_PAGE_SIZE: u8 = 100;

/// Pause between successive page requests of one listing
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(2);

/// Default number of concurrent repository lookups
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// How many pages a single-page listing reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageScope {
    /// Only the first page (teams, team repositories, reviews)
    #[default]
    FirstPage,
    /// Follow next-page links until exhausted
    All,
}

/// Tuning knobs for the retrieval layer
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub page_size: u8,
    pub page_delay: Duration,
    pub max_concurrency: usize,
    pub page_scope: PageScope,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
            page_delay: DEFAULT_PAGE_DELAY,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            page_scope: PageScope::FirstPage,
        }
    }
}

/// Query for a single page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u8,
}

/// One page of results plus the pagination hints from the response
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub next_page: Option<u32>,
    pub last_page: Option<u32>,
}

impl<T> PageResult<T> {
    /// A page with no successor
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_page: None,
            last_page: None,
        }
    }

    pub fn has_more(&self) -> bool {
        self.next_page.is_some_and(|next| next > 0)
    }
}

/// Page index plus the last-page bound, unknown until the first response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: u32,
    last_page: Option<u32>,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCursor {
    pub fn new() -> Self {
        Self {
            page: 1,
            last_page: None,
        }
    }

    pub fn request(&self, per_page: u8) -> PageRequest {
        PageRequest {
            page: self.page,
            per_page,
        }
    }

    /// Records the hints of the page just received and moves to the next
    /// page. Returns `false` once the listing is exhausted.
    pub fn advance<T>(&mut self, result: &PageResult<T>) -> bool {
        if let Some(last) = result.last_page {
            self.last_page = Some(last);
        }
        if result.has_more() {
            self.page += 1;
            true
        } else {
            false
        }
    }
}

impl std::fmt::Display for PageCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.last_page {
            Some(last) => write!(f, "{}/{}", self.page, last),
            None => write!(f, "{}/?", self.page),
        }
    }
}

/// Walks a paginated listing and concatenates its pages in response order.
///
/// `label` only names the listing in log output. With [`PageScope::FirstPage`]
/// the walk stops after the first response. Between two requests the walk
/// sleeps for `options.page_delay`. The first error aborts the walk and no
/// further page is requested.
pub async fn collect_pages<T, F, Fut>(
    label: &str,
    scope: PageScope,
    options: &FetchOptions,
    mut fetch: F,
) -> Result<Vec<T>>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<PageResult<T>>>,
{
    let mut items = Vec::new();
    let mut cursor = PageCursor::new();

    loop {
        info!("Fetching {} page {} ...", label, cursor);
        let result = fetch(cursor.request(options.page_size)).await?;
        let more = cursor.advance(&result);
        items.extend(result.items);

        if !more {
            break;
        }
        if scope == PageScope::FirstPage {
            warn!("{} has more than one page, only the first was read", label);
            break;
        }
        tokio::time::sleep(options.page_delay).await;
    }

    Ok(items)
}

/// Extracts the `page` parameter from a `Link` header URL query string
pub fn page_param(query: &str) -> Option<u32> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::GhsError;

    fn options() -> FetchOptions {
        FetchOptions {
            page_delay: Duration::ZERO,
            ..FetchOptions::default()
        }
    }

    fn page(items: Vec<u32>, next: Option<u32>, last: Option<u32>) -> PageResult<u32> {
        PageResult {
            items,
            next_page: next,
            last_page: last,
        }
    }

    #[test]
    fn test_cursor_display_before_first_response() {
        assert_eq!(PageCursor::new().to_string(), "1/?");
    }

    #[test]
    fn test_cursor_advances_and_learns_last_page() {
        let mut cursor = PageCursor::new();
        assert!(cursor.advance(&page(vec![1], Some(2), Some(3))));
        assert_eq!(cursor.request(100).page, 2);
        assert_eq!(cursor.to_string(), "2/3");
        assert!(!cursor.advance(&page(vec![], None, None)));
        assert_eq!(cursor.request(100).page, 2);
        // the bound is kept when the last page omits it
        assert_eq!(cursor.to_string(), "2/3");
    }

    #[test]
    fn test_zero_next_page_is_exhausted() {
        assert!(!page(vec![], Some(0), None).has_more());
    }

    #[test]
    fn test_page_param() {
        assert_eq!(page_param("state=all&page=3&per_page=100"), Some(3));
        assert_eq!(page_param("per_page=100"), None);
        assert_eq!(page_param("page=abc"), None);
    }

    #[tokio::test]
    async fn test_collect_all_pages_in_order() {
        let requested = RefCell::new(Vec::new());
        let items = collect_pages("test", PageScope::All, &options(), |req| {
            requested.borrow_mut().push(req.page);
            let result = match req.page {
                1 => page(vec![1, 2], Some(2), Some(3)),
                2 => page(vec![3, 4], Some(3), Some(3)),
                _ => page(vec![5], None, None),
            };
            async move { Ok(result) }
        })
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(*requested.borrow(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_first_page_scope_stops_early() {
        let requested = RefCell::new(0);
        let items = collect_pages("test", PageScope::FirstPage, &options(), |_| {
            *requested.borrow_mut() += 1;
            async { Ok(page(vec![1, 2], Some(2), Some(5))) }
        })
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2]);
        assert_eq!(*requested.borrow(), 1);
    }

    #[tokio::test]
    async fn test_error_stops_walk() {
        let requested = RefCell::new(Vec::new());
        let result = collect_pages("test", PageScope::All, &options(), |req| {
            requested.borrow_mut().push(req.page);
            let outcome = if req.page == 2 {
                Err(GhsError::GitHubApi("boom".to_string()))
            } else {
                Ok(page(vec![req.page], Some(req.page + 1), None))
            };
            async move { outcome }
        })
        .await;

        assert!(matches!(result, Err(GhsError::GitHubApi(_))));
        assert_eq!(*requested.borrow(), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_between_pages_only() {
        let started = tokio::time::Instant::now();
        let opts = FetchOptions::default();
        collect_pages("test", PageScope::All, &opts, |req| {
            let next = if req.page < 3 { Some(req.page + 1) } else { None };
            async move { Ok(page(vec![req.page], next, Some(3))) }
        })
        .await
        .unwrap();

        let elapsed = started.elapsed();
        assert!(elapsed >= DEFAULT_PAGE_DELAY * 2, "finished after {elapsed:?}");
        assert!(elapsed < DEFAULT_PAGE_DELAY * 3, "finished after {elapsed:?}");
    }
}
