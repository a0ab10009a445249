//! HTTP middleware for request tracking and cross-origin access.
//!
//! This module provides the layer stack applied to the whole router:
//! - **Request IDs**: Reuse the `x-request-id` header or generate a UUID, and
//!   echo it on the response
//! - **Tracing**: One `http_request` span per request carrying the request ID
//! - **CORS**: Any origin, any method, any header
//!
//! # Flow
//!
//! 1. **Assign** request ID (outermost, so the span can see it)
//! 2. **Open** tracing span with `request_id`, `method` and `uri`
//! 3. **Run** the handler
//! 4. **Propagate** request ID into the response headers

use axum::{Router, body::Body, http::Request};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;

/// Header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wrap `router` in the request-id, tracing and CORS layers.
///
/// # Example
///
/// ```ignore
/// let app = with_http_layers(Router::new().route("/health", get(health_check)));
/// ```
#[must_use]
pub fn with_http_layers(router: Router) -> Router {
    // Last added runs first
    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(cors_layer())
}

/// CORS policy allowing any origin, method and header.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the tracing span for one request.
pub fn make_request_span(request: &Request<Body>) -> Span {
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
