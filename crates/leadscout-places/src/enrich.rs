//! Bounded-concurrency detail enrichment.
//!
//! Detail lookups run through an ordered window of `concurrency` in-flight
//! requests. A lookup that fails with a fatal error (quota, denial) aborts
//! the whole enrichment and drops the lookups still in flight; any other
//! failure is logged and the record falls back to its summary.

use futures::{stream, StreamExt, TryStreamExt};

use crate::client::PlacesApi;
use crate::error::PlacesError;
use crate::normalize::normalize_record;
use crate::types::{EntityDetail, NormalizedRecord, SearchSummary};

/// Number of detail lookups in flight at once.
pub const DEFAULT_DETAIL_CONCURRENCY: usize = leadscout_core::MAX_DETAIL_CONCURRENCY;

/// Enriches every summary and returns one record per summary, in input order.
///
/// # Errors
///
/// Returns the first fatal error ([`PlacesError::is_fatal`]) raised by a
/// detail lookup. No partial result set is returned in that case.
pub async fn enrich_summaries<A: PlacesApi>(
    api: &A,
    api_key: &str,
    summaries: Vec<SearchSummary>,
    concurrency: usize,
) -> Result<Vec<NormalizedRecord>, PlacesError> {
    let place_ids: Vec<String> = summaries.iter().map(|s| s.id.clone()).collect();
    let details: Vec<Option<EntityDetail>> = stream::iter(place_ids)
        .map(|place_id| async move { fetch_contained(api, api_key, &place_id).await })
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;

    Ok(summaries
        .iter()
        .zip(&details)
        .map(|(summary, detail)| normalize_record(summary, detail.as_ref()))
        .collect())
}

/// Looks up one detail, absorbing every error that is not fatal.
async fn fetch_contained<A: PlacesApi>(
    api: &A,
    api_key: &str,
    place_id: &str,
) -> Result<Option<EntityDetail>, PlacesError> {
    match api.place_details(api_key, place_id).await {
        Ok(detail) => Ok(detail),
        Err(e) if e.is_fatal() => {
            tracing::error!(place_id, error = %e, "fatal detail lookup failure; aborting search");
            Err(e)
        }
        Err(e) => {
            tracing::warn!(place_id, error = %e, "detail lookup failed; using summary only");
            Ok(None)
        }
    }
}
