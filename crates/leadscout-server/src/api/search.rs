use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use leadscout_places::{run_search, NormalizedRecord, SearchRequest};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{map_places_error, ApiError, AppState};

#[derive(Debug, Serialize)]
pub(super) struct SearchResponse {
    pub results: Vec<NormalizedRecord>,
}

pub(super) async fn search_places(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(request) =
        body.map_err(|rejection| ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text()))?;

    let search = request
        .validate()
        .map_err(|e| map_places_error(&req_id.0, &e))?;

    tracing::info!(
        request_id = %req_id.0,
        query = %search.query,
        max_results = search.max_results,
        "search request accepted"
    );

    let results = run_search(state.places.as_ref(), &search, &state.options)
        .await
        .map_err(|e| map_places_error(&req_id.0, &e))?;

    Ok(Json(SearchResponse { results }))
}
