//! Multi-page traversal of the text search endpoint.
//!
//! The API hands back a continuation token with each full page, but rejects
//! that token until it has propagated server-side. The walker therefore waits
//! a fixed delay before every follow-up request. Traversal is modelled as a
//! small state machine:
//!
//! ```text
//! Fetching ──page with token, below cap──▶ Waiting ──delay──▶ Fetching
//!    │ └──no token, or cap reached──▶ Done
//!    └──error──▶ Failed
//! ```

use std::time::Duration;

use crate::client::PlacesApi;
use crate::error::PlacesError;
use crate::request::HARD_CEILING;
use crate::types::SearchSummary;

/// Guard against a remote that keeps returning tokens with empty pages.
pub(crate) const MAX_PAGES: usize = 10;

enum WalkState {
    Fetching { page_token: Option<String> },
    Waiting { page_token: String },
    Done,
    Failed(PlacesError),
}

/// Collects up to `max_results` summaries (never more than [`HARD_CEILING`])
/// across as many pages as needed, in discovery order.
///
/// **All-or-nothing semantics**: any page failure discards summaries from
/// earlier pages and returns the error.
///
/// # Errors
///
/// Propagates any error from [`PlacesApi::search_page`].
pub async fn walk_search<A: PlacesApi>(
    api: &A,
    api_key: &str,
    query: &str,
    max_results: usize,
    page_delay: Duration,
) -> Result<Vec<SearchSummary>, PlacesError> {
    let cap = max_results.min(HARD_CEILING);
    let mut collected: Vec<SearchSummary> = Vec::new();
    let mut pages = 0usize;
    let mut state = WalkState::Fetching { page_token: None };

    loop {
        state = match state {
            WalkState::Fetching { page_token } => {
                pages += 1;
                match api.search_page(api_key, query, page_token.as_deref()).await {
                    Ok(page) => {
                        tracing::debug!(
                            page = pages,
                            count = page.summaries.len(),
                            has_token = page.next_page_token.is_some(),
                            "received search page"
                        );
                        collected.extend(page.summaries);
                        match page.next_page_token {
                            Some(token) if collected.len() < cap && pages < MAX_PAGES => {
                                WalkState::Waiting { page_token: token }
                            }
                            Some(_) if pages >= MAX_PAGES => {
                                tracing::warn!(pages, "search page limit reached; stopping");
                                WalkState::Done
                            }
                            _ => WalkState::Done,
                        }
                    }
                    Err(e) => WalkState::Failed(e),
                }
            }
            WalkState::Waiting { page_token } => {
                tracing::debug!(
                    delay_ms = u64::try_from(page_delay.as_millis()).unwrap_or(u64::MAX),
                    "waiting before requesting next search page"
                );
                tokio::time::sleep(page_delay).await;
                WalkState::Fetching {
                    page_token: Some(page_token),
                }
            }
            WalkState::Done => {
                collected.truncate(cap);
                return Ok(collected);
            }
            WalkState::Failed(e) => return Err(e),
        };
    }
}
