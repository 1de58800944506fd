//! Places Web Service response types and the domain records built from them.
//!
//! Every endpoint wraps its payload in a `{"status": "OK", ...}` envelope;
//! [`BusinessStatus::classify`] turns that status string into the handful of
//! outcomes the pipeline cares about.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Business status
// ---------------------------------------------------------------------------

/// Classification of the `"status"` field carried by every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessStatus {
    Ok,
    ZeroResults,
    NotFound,
    RateLimited,
    Denied,
    Other,
}

impl BusinessStatus {
    #[must_use]
    pub fn classify(status: &str) -> Self {
        match status {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            "NOT_FOUND" => Self::NotFound,
            "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" => Self::RateLimited,
            "REQUEST_DENIED" | "INVALID_REQUEST" => Self::Denied,
            _ => Self::Other,
        }
    }
}

// ---------------------------------------------------------------------------
// textsearch
// ---------------------------------------------------------------------------

/// Envelope for the `textsearch/json` endpoint.
#[derive(Debug, Deserialize)]
pub struct TextSearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// A single search hit.
#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub business_status: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub types: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: Coordinates,
}

// ---------------------------------------------------------------------------
// details
// ---------------------------------------------------------------------------

/// Envelope for the `details/json` endpoint.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<PlaceDetailsResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// The fields requested through [`DETAIL_FIELDS`](crate::client::DETAIL_FIELDS).
#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub international_phone_number: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub business_status: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub types: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Domain records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A search hit before enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSummary {
    pub id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub categories: Option<Vec<String>>,
}

impl SearchSummary {
    /// Converts a wire result, returning `None` when it carries no `place_id`.
    #[must_use]
    pub fn from_result(result: PlaceResult) -> Option<Self> {
        let id = result.place_id.filter(|id| !id.is_empty())?;
        Some(Self {
            id,
            name: result.name,
            address: result.formatted_address,
            status: result.business_status,
            coordinates: result.geometry.map(|g| g.location),
            categories: result.types,
        })
    }
}

/// One page of search hits plus the token for the next page, if any.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub summaries: Vec<SearchSummary>,
    pub next_page_token: Option<String>,
}

/// Enriched attributes from a detail lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityDetail {
    pub name: Option<String>,
    pub phone1: Option<String>,
    pub phone2: Option<String>,
    pub address: Option<String>,
    pub canonical_url: Option<String>,
    pub website: Option<String>,
    pub status: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub categories: Option<Vec<String>>,
}

impl From<PlaceDetailsResult> for EntityDetail {
    fn from(result: PlaceDetailsResult) -> Self {
        Self {
            name: result.name,
            phone1: result.formatted_phone_number,
            phone2: result.international_phone_number,
            address: result.formatted_address,
            canonical_url: result.url,
            website: result.website,
            status: result.business_status,
            coordinates: result.geometry.map(|g| g.location),
            categories: result.types,
        }
    }
}

/// The flattened, export-ready record returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}
