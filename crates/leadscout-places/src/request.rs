//! Inbound search requests and their sanitation.

use serde::Deserialize;
use serde_json::Value;

use crate::error::PlacesError;

/// Absolute maximum number of summaries collected by one search.
pub const HARD_CEILING: usize = 60;

/// A search request as submitted by a caller.
///
/// Every field is optional at the serde level so that missing values surface
/// as [`PlacesError::Validation`] rather than a body-parsing rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Accepted as any JSON value; see [`sanitize_max_results`].
    #[serde(default)]
    pub max_results: Option<Value>,
}

/// A request that passed validation and is ready to run.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatedSearch {
    pub api_key: String,
    /// The composed query, location included.
    pub query: String,
    pub max_results: usize,
}

impl std::fmt::Debug for ValidatedSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedSearch")
            .field("api_key", &"[redacted]")
            .field("query", &self.query)
            .field("max_results", &self.max_results)
            .finish()
    }
}

impl SearchRequest {
    /// Checks the credential and query and applies query composition and
    /// result-cap sanitation.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Validation`] when the API key or query is
    /// missing or blank.
    pub fn validate(&self) -> Result<ValidatedSearch, PlacesError> {
        let api_key = trimmed(self.api_key.as_deref())
            .ok_or_else(|| PlacesError::Validation("API key is required".to_owned()))?;
        let query = trimmed(self.query.as_deref())
            .ok_or_else(|| PlacesError::Validation("Search query is required".to_owned()))?;

        Ok(ValidatedSearch {
            api_key: api_key.to_owned(),
            query: compose_query(query, self.location.as_deref()),
            max_results: sanitize_max_results(self.max_results.as_ref()),
        })
    }
}

/// Appends `" in <location>"` when a non-blank location is given.
#[must_use]
pub fn compose_query(query: &str, location: Option<&str>) -> String {
    match trimmed(location) {
        Some(location) => format!("{query} in {location}"),
        None => query.to_owned(),
    }
}

/// Turns a caller-supplied result cap into an integer in `1..=60`.
///
/// Numbers and numeric strings are floored and clamped; anything else
/// (missing, null, non-numeric, NaN) falls back to [`HARD_CEILING`].
#[must_use]
pub fn sanitize_max_results(raw: Option<&Value>) -> usize {
    let parsed = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.map_or(HARD_CEILING, clamp_max_results)
}

/// Floors and clamps a numeric cap into `1..=60`. NaN maps to [`HARD_CEILING`].
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn clamp_max_results(value: f64) -> usize {
    if value.is_nan() {
        return HARD_CEILING;
    }
    value.floor().clamp(1.0, HARD_CEILING as f64) as usize
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
