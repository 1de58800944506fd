//! End-to-end search: walk result pages, then enrich every summary.

use std::time::Duration;

use crate::client::PlacesApi;
use crate::enrich::{enrich_summaries, DEFAULT_DETAIL_CONCURRENCY};
use crate::error::PlacesError;
use crate::request::ValidatedSearch;
use crate::types::NormalizedRecord;
use crate::walker::walk_search;

/// Delay the text search endpoint requires before a continuation token is valid.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(leadscout_core::MIN_PAGE_DELAY_MS);

/// Pacing knobs for one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    pub page_delay: Duration,
    pub detail_concurrency: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            page_delay: DEFAULT_PAGE_DELAY,
            detail_concurrency: DEFAULT_DETAIL_CONCURRENCY,
        }
    }
}

impl PipelineOptions {
    /// Reads pacing from config, holding it inside the upstream's limits even
    /// for a hand-built `AppConfig`.
    #[must_use]
    pub fn from_config(config: &leadscout_core::AppConfig) -> Self {
        Self {
            page_delay: Duration::from_millis(
                config.page_delay_ms.max(leadscout_core::MIN_PAGE_DELAY_MS),
            ),
            detail_concurrency: config
                .detail_concurrency
                .clamp(1, leadscout_core::MAX_DETAIL_CONCURRENCY),
        }
    }
}

/// Runs a validated search and returns one record per retained summary.
///
/// Enrichment only starts after the walker has finished every page.
///
/// # Errors
///
/// Any walker error, or a fatal detail error, aborts the run; no partial
/// results are returned.
pub async fn run_search<A: PlacesApi>(
    api: &A,
    search: &ValidatedSearch,
    options: &PipelineOptions,
) -> Result<Vec<NormalizedRecord>, PlacesError> {
    tracing::info!(
        query = %search.query,
        max_results = search.max_results,
        "starting places search"
    );

    let summaries = walk_search(
        api,
        &search.api_key,
        &search.query,
        search.max_results,
        options.page_delay,
    )
    .await?;
    let summary_count = summaries.len();

    let records = enrich_summaries(
        api,
        &search.api_key,
        summaries,
        options.detail_concurrency,
    )
    .await?;

    tracing::info!(
        query = %search.query,
        summaries = summary_count,
        records = records.len(),
        "places search complete"
    );
    Ok(records)
}
