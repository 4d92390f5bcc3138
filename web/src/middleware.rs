//! Axum middleware for request tracking and observability.
//!
//! - **Request id**: taken from the `x-request-id` header, or generated as a
//!   UUID, and echoed back on the response
//! - **Tracing**: one `http_request` span per request, carrying the request id
//! - **CORS**: optional permissive policy for browser clients
//!
//! # Example
//!
//! ```ignore
//! let app = with_http_layers(movie_router(state), false);
//! ```

use axum::{
    Router,
    body::Body,
    http::{HeaderName, Request},
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

/// Header name for the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wrap a router with request-id, tracing and (optionally) CORS layers.
///
/// The request id is assigned before the trace span is created so the span
/// can record it.
#[must_use]
pub fn with_http_layers(router: Router, cors_permissive: bool) -> Router {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);

    let router = router
        .layer(PropagateRequestIdLayer::new(header.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::new(header, MakeRequestUuid));

    if cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

fn make_request_span(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    )
}
