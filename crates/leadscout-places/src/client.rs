//! HTTP client for the Places Web Service.
//!
//! Wraps `reqwest` with the credential handling, URL building and status
//! classification for the two endpoints the pipeline uses: `textsearch` for
//! pages of summaries and `details` for per-place enrichment.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::PlacesError;
use crate::types::{
    BusinessStatus, DetailsResponse, EntityDetail, SearchPage, SearchSummary, TextSearchResponse,
};

/// Field mask sent with every detail lookup.
pub const DETAIL_FIELDS: &str = "name,formatted_phone_number,international_phone_number,\
formatted_address,url,website,business_status,geometry,types";

/// The remote operations the walker and orchestrator depend on.
///
/// Implemented by [`PlacesClient`]; tests substitute in-memory fakes.
pub trait PlacesApi: Sync {
    /// Fetches one page of search results.
    ///
    /// A `ZERO_RESULTS` status yields an empty page. Every other non-OK
    /// status is an error.
    fn search_page(
        &self,
        api_key: &str,
        query: &str,
        page_token: Option<&str>,
    ) -> impl Future<Output = Result<SearchPage, PlacesError>> + Send;

    /// Looks up enriched attributes for one place.
    ///
    /// `Ok(None)` means the detail is absent and the record should be built
    /// from the summary alone.
    fn place_details(
        &self,
        api_key: &str,
        place_id: &str,
    ) -> impl Future<Output = Result<Option<EntityDetail>, PlacesError>> + Send;
}

/// Client for the Places Web Service.
///
/// Holds the connection pool and API root only; the credential is supplied
/// per call so one client can serve many callers.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    client: Client,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(
            timeout_secs,
            user_agent,
            leadscout_core::DEFAULT_PLACES_BASE_URL,
        )
    }

    /// Creates a client with a custom API root (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .map_err(PlacesError::http)?;

        // A trailing slash makes `Url::join` append endpoint paths instead of
        // replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Builds a client from application configuration.
    ///
    /// # Errors
    ///
    /// See [`PlacesClient::with_base_url`].
    pub fn from_config(config: &leadscout_core::AppConfig) -> Result<Self, PlacesError> {
        Self::with_base_url(
            config.request_timeout_secs,
            &config.user_agent,
            &config.places_base_url,
        )
    }

    /// Builds an endpoint URL with percent-encoded query parameters, the
    /// credential last.
    fn build_url(
        &self,
        endpoint: &str,
        api_key: &str,
        extra: &[(&str, &str)],
    ) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", api_key);
        }
        Ok(url)
    }
}

impl PlacesApi for PlacesClient {
    async fn search_page(
        &self,
        api_key: &str,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<SearchPage, PlacesError> {
        let mut params = vec![("query", query)];
        if let Some(token) = page_token {
            params.push(("pagetoken", token));
        }
        let url = self.build_url("textsearch/json", api_key, &params)?;

        tracing::debug!(query, has_token = page_token.is_some(), "requesting search page");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(PlacesError::http)?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(throttled("textsearch"));
        }
        if !status.is_success() {
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: "textsearch",
            });
        }

        let body = response.text().await.map_err(PlacesError::http)?;
        let parsed: TextSearchResponse =
            serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
                context: format!("textsearch(query={query})"),
                source: e,
            })?;

        search_page_from_response(parsed)
    }

    async fn place_details(
        &self,
        api_key: &str,
        place_id: &str,
    ) -> Result<Option<EntityDetail>, PlacesError> {
        let url = self.build_url(
            "details/json",
            api_key,
            &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
        )?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(PlacesError::http)?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(throttled("details"));
        }
        if !status.is_success() {
            tracing::warn!(
                place_id,
                status = status.as_u16(),
                "detail lookup returned non-success HTTP status; treating as absent"
            );
            return Ok(None);
        }

        let body = response.text().await.map_err(PlacesError::http)?;
        let parsed: DetailsResponse =
            serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
                context: format!("details(place_id={place_id})"),
                source: e,
            })?;

        detail_from_response(parsed)
    }
}

/// HTTP 429 from either endpoint is a quota error, whatever the body says.
fn throttled(endpoint: &str) -> PlacesError {
    tracing::warn!(endpoint, "places endpoint answered HTTP 429");
    PlacesError::RateLimited(format!("HTTP 429 from {endpoint}"))
}

/// Classifies a search envelope into a page or an error.
///
/// # Errors
///
/// - [`PlacesError::RateLimited`] on a quota status.
/// - [`PlacesError::Denied`] when the request itself was rejected.
/// - [`PlacesError::Api`] for any other non-OK status.
pub fn search_page_from_response(body: TextSearchResponse) -> Result<SearchPage, PlacesError> {
    match BusinessStatus::classify(&body.status) {
        BusinessStatus::Ok => {
            let summaries = body
                .results
                .into_iter()
                .filter_map(|result| {
                    let summary = SearchSummary::from_result(result);
                    if summary.is_none() {
                        tracing::warn!("skipping search result without place_id");
                    }
                    summary
                })
                .collect();
            let next_page_token = body.next_page_token.filter(|t| !t.is_empty());
            Ok(SearchPage {
                summaries,
                next_page_token,
            })
        }
        BusinessStatus::ZeroResults => Ok(SearchPage::default()),
        classified => Err(status_error(classified, body.status, body.error_message)),
    }
}

/// Classifies a detail envelope into a detail, an absence, or an error.
///
/// `OK` without a `result` object counts as absent.
///
/// # Errors
///
/// - [`PlacesError::RateLimited`] on a quota status.
/// - [`PlacesError::Denied`] when the request itself was rejected.
/// - [`PlacesError::Api`] for any other unexpected status.
pub fn detail_from_response(body: DetailsResponse) -> Result<Option<EntityDetail>, PlacesError> {
    match BusinessStatus::classify(&body.status) {
        BusinessStatus::Ok => Ok(body.result.map(EntityDetail::from)),
        BusinessStatus::NotFound | BusinessStatus::ZeroResults => Ok(None),
        classified => Err(status_error(classified, body.status, body.error_message)),
    }
}

fn status_error(
    classified: BusinessStatus,
    status: String,
    error_message: Option<String>,
) -> PlacesError {
    let message = error_message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| status.clone());
    match classified {
        BusinessStatus::RateLimited => PlacesError::RateLimited(message),
        BusinessStatus::Denied => PlacesError::Denied { status, message },
        _ => PlacesError::Api { status, message },
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
