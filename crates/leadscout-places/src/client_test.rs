use super::*;

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url(30, "leadscout-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn search_body(value: serde_json::Value) -> TextSearchResponse {
    serde_json::from_value(value).expect("valid search envelope")
}

fn details_body(value: serde_json::Value) -> DetailsResponse {
    serde_json::from_value(value).expect("valid details envelope")
}

#[test]
fn build_url_joins_endpoint_and_appends_key_last() {
    let client = test_client("https://maps.googleapis.com/maps/api/place");
    let url = client
        .build_url("textsearch/json", "test-key", &[("query", "coffee")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/place/textsearch/json?query=coffee&key=test-key"
    );
}

#[test]
fn build_url_strips_duplicate_trailing_slashes() {
    let client = test_client("http://localhost:8080//");
    let url = client
        .build_url("details/json", "k", &[("place_id", "abc")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "http://localhost:8080/details/json?place_id=abc&key=k"
    );
}

#[test]
fn build_url_encodes_composed_query() {
    let client = test_client("http://localhost:8080");
    let url = client
        .build_url("textsearch/json", "k", &[("query", "coffee & tea in Austin")])
        .unwrap();
    assert!(
        url.as_str().contains("coffee+%26+tea+in+Austin"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn rejects_invalid_base_url() {
    let result = PlacesClient::with_base_url(30, "ua", "not a url");
    assert!(matches!(result, Err(PlacesError::InvalidBaseUrl { .. })));
}

#[test]
fn search_ok_collects_summaries_and_token() {
    let page = search_page_from_response(search_body(serde_json::json!({
        "status": "OK",
        "results": [
            { "place_id": "a", "name": "First" },
            { "name": "Missing id" },
            { "place_id": "b", "name": "Second" }
        ],
        "next_page_token": "tok-2"
    })))
    .unwrap();
    let ids: Vec<&str> = page.summaries.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(page.next_page_token.as_deref(), Some("tok-2"));
}

#[test]
fn search_empty_token_is_treated_as_absent() {
    let page = search_page_from_response(search_body(serde_json::json!({
        "status": "OK",
        "results": [],
        "next_page_token": ""
    })))
    .unwrap();
    assert!(page.next_page_token.is_none());
}

#[test]
fn search_zero_results_is_empty_page() {
    let page = search_page_from_response(search_body(serde_json::json!({
        "status": "ZERO_RESULTS",
        "results": []
    })))
    .unwrap();
    assert!(page.summaries.is_empty());
    assert!(page.next_page_token.is_none());
}

#[test]
fn search_over_query_limit_is_rate_limited() {
    let err = search_page_from_response(search_body(serde_json::json!({
        "status": "OVER_QUERY_LIMIT",
        "error_message": "You have exceeded your daily request quota for this API."
    })))
    .unwrap_err();
    assert!(matches!(err, PlacesError::RateLimited(_)));
}

#[test]
fn search_request_denied_surfaces_upstream_message() {
    let err = search_page_from_response(search_body(serde_json::json!({
        "status": "REQUEST_DENIED",
        "error_message": "The provided API key is invalid."
    })))
    .unwrap_err();
    assert!(matches!(err, PlacesError::Denied { .. }));
    assert_eq!(err.to_string(), "The provided API key is invalid.");
}

#[test]
fn search_unknown_status_without_message_uses_status() {
    let err = search_page_from_response(search_body(serde_json::json!({
        "status": "UNKNOWN_ERROR"
    })))
    .unwrap_err();
    match err {
        PlacesError::Api { status, message } => {
            assert_eq!(status, "UNKNOWN_ERROR");
            assert_eq!(message, "UNKNOWN_ERROR");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn detail_ok_maps_fields() {
    let detail = detail_from_response(details_body(serde_json::json!({
        "status": "OK",
        "result": {
            "name": "Bean There",
            "formatted_phone_number": "(512) 555-0100",
            "international_phone_number": "+1 512-555-0100",
            "formatted_address": "1 Main St, Austin, TX",
            "url": "https://maps.google.com/?cid=1",
            "website": "https://beanthere.example",
            "business_status": "OPERATIONAL",
            "geometry": { "location": { "lat": 30.0, "lng": -97.0 } },
            "types": ["cafe"]
        }
    })))
    .unwrap()
    .expect("detail present");
    assert_eq!(detail.phone1.as_deref(), Some("(512) 555-0100"));
    assert_eq!(detail.phone2.as_deref(), Some("+1 512-555-0100"));
    assert_eq!(
        detail.canonical_url.as_deref(),
        Some("https://maps.google.com/?cid=1")
    );
}

#[test]
fn detail_not_found_and_zero_results_are_absent() {
    for status in ["NOT_FOUND", "ZERO_RESULTS"] {
        let outcome = detail_from_response(details_body(serde_json::json!({ "status": status })));
        assert!(matches!(outcome, Ok(None)), "{status} should be absent");
    }
}

#[test]
fn detail_ok_without_result_is_absent() {
    let outcome = detail_from_response(details_body(serde_json::json!({ "status": "OK" })));
    assert!(matches!(outcome, Ok(None)));
}

#[test]
fn detail_over_query_limit_is_rate_limited() {
    let outcome =
        detail_from_response(details_body(serde_json::json!({ "status": "OVER_QUERY_LIMIT" })));
    assert!(matches!(outcome, Err(PlacesError::RateLimited(_))));
}

#[test]
fn detail_unknown_error_is_api_error() {
    let outcome =
        detail_from_response(details_body(serde_json::json!({ "status": "UNKNOWN_ERROR" })));
    assert!(matches!(outcome, Err(PlacesError::Api { .. })));
}
