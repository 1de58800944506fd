use thiserror::Error;

/// Errors returned by the places search pipeline.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// The caller's request is missing a credential or a query.
    #[error("{0}")]
    Validation(String),

    /// The configured API root is not a usable URL.
    #[error("invalid places base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// Network or TLS failure from the underlying HTTP client.
    ///
    /// The request URL is stripped before wrapping because the credential
    /// travels in the query string.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The search endpoint answered with a non-2xx HTTP status.
    #[error("unexpected HTTP status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: &'static str },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API reported that the key's quota is exhausted.
    #[error("Places API quota exceeded, please wait a moment and try again ({0})")]
    RateLimited(String),

    /// The API rejected the request itself (bad key, disabled API, malformed parameters).
    #[error("{message}")]
    Denied { status: String, message: String },

    /// Any other non-OK business status.
    #[error("Places API error {status}: {message}")]
    Api { status: String, message: String },
}

impl PlacesError {
    /// Errors that must abort a whole search rather than degrade one record.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::RateLimited(_) | Self::Denied { .. })
    }

    pub(crate) fn http(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_and_denied_are_fatal() {
        assert!(PlacesError::RateLimited("OVER_QUERY_LIMIT".to_owned()).is_fatal());
        assert!(PlacesError::Denied {
            status: "REQUEST_DENIED".to_owned(),
            message: "The provided API key is invalid.".to_owned(),
        }
        .is_fatal());
    }

    #[test]
    fn unclassified_errors_are_not_fatal() {
        assert!(!PlacesError::Api {
            status: "UNKNOWN_ERROR".to_owned(),
            message: "server hiccup".to_owned(),
        }
        .is_fatal());
        assert!(!PlacesError::UnexpectedStatus {
            status: 500,
            endpoint: "details",
        }
        .is_fatal());
    }

    #[test]
    fn denied_message_is_surfaced_verbatim() {
        let err = PlacesError::Denied {
            status: "REQUEST_DENIED".to_owned(),
            message: "This API project is not authorized to use this API.".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "This API project is not authorized to use this API."
        );
    }

    #[test]
    fn rate_limited_message_advises_backoff() {
        let msg = PlacesError::RateLimited("OVER_QUERY_LIMIT".to_owned()).to_string();
        assert!(msg.contains("wait"), "message should advise backoff: {msg}");
    }
}
