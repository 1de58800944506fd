mod search;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use leadscout_places::{PipelineOptions, PlacesClient, PlacesError};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id;

pub(crate) const GENERIC_ERROR_MESSAGE: &str =
    "An unexpected error occurred while searching for places";

#[derive(Clone)]
pub struct AppState {
    pub places: Arc<PlacesClient>,
    pub options: PipelineOptions,
}

/// Error body returned for every failed request: `{ "error": "..." }`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (
            self.status,
            Json(ErrorBody {
                error: &self.message,
            }),
        )
            .into_response()
    }
}

/// Maps a pipeline error onto an HTTP status and caller-facing message.
///
/// Validation, quota, denial and unclassified business errors carry their
/// own message; transport and parsing failures are reported generically.
pub(super) fn map_places_error(request_id: &str, error: &PlacesError) -> ApiError {
    match error {
        PlacesError::Validation(msg) => ApiError::new(StatusCode::BAD_REQUEST, msg.clone()),
        PlacesError::RateLimited(_) => {
            tracing::warn!(request_id, error = %error, "places quota exceeded");
            ApiError::new(StatusCode::TOO_MANY_REQUESTS, error.to_string())
        }
        PlacesError::Denied { status, message } => {
            tracing::warn!(request_id, status = %status, "places request denied");
            ApiError::new(StatusCode::FORBIDDEN, message.clone())
        }
        PlacesError::Api { .. } => {
            tracing::error!(request_id, error = %error, "places API returned an error status");
            ApiError::new(StatusCode::BAD_GATEWAY, error.to_string())
        }
        PlacesError::Http(_)
        | PlacesError::UnexpectedStatus { .. }
        | PlacesError::Deserialize { .. }
        | PlacesError::InvalidBaseUrl { .. } => {
            tracing::error!(request_id, error = %error, "places search failed");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE)
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/search", post(search::search_places))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthData { status: "ok" }))
}
