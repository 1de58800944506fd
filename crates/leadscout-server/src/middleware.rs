use std::time::Instant;

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id for one API call, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    /// Reuses a non-blank caller-supplied id, otherwise mints a `UUIDv4`.
    fn from_request(req: &Request) -> Self {
        let id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or_else(|| Uuid::new_v4().to_string(), String::from);
        Self(id)
    }
}

/// Tags every request with a [`RequestId`] and runs it inside an `api_request`
/// span, so walker and enrichment logs for one search share the id. The id is
/// echoed back in the `x-request-id` response header.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let request_id = RequestId::from_request(&req);
    let span = tracing::info_span!(
        "api_request",
        request_id = %request_id.0,
        method = %req.method(),
        path = %req.uri().path(),
    );
    let header = HeaderValue::from_str(&request_id.0).ok();
    req.extensions_mut().insert(request_id);

    async move {
        let started = Instant::now();
        let mut res = next.run(req).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        tracing::debug!(status = res.status().as_u16(), elapsed_ms, "request finished");

        if let Some(val) = header {
            res.headers_mut().insert(REQUEST_ID_HEADER, val);
        }
        res
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request as HttpRequest, routing::get, Extension, Router};
    use tower::ServiceExt;

    use super::*;

    fn echo_app() -> Router {
        Router::new()
            .route(
                "/echo",
                get(|Extension(id): Extension<RequestId>| async move { id.0 }),
            )
            .layer(axum::middleware::from_fn(request_id))
    }

    #[tokio::test]
    async fn caller_supplied_id_is_trimmed_and_echoed() {
        let response = echo_app()
            .oneshot(
                HttpRequest::builder()
                    .uri("/echo")
                    .header(REQUEST_ID_HEADER, "  abc-123 ")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        assert_eq!(&bytes[..], b"abc-123");
    }

    #[tokio::test]
    async fn blank_id_is_replaced_with_uuid() {
        let response = echo_app()
            .oneshot(
                HttpRequest::builder()
                    .uri("/echo")
                    .header(REQUEST_ID_HEADER, "   ")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        let id = response.headers()[REQUEST_ID_HEADER]
            .to_str()
            .expect("ascii header");
        assert!(Uuid::parse_str(id).is_ok(), "expected uuid, got {id}");
    }
}
