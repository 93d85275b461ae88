//! # Middleware Stack
//!
//! Tower layers shared by every schema route:
//! - [`trace_layer`]: request/response tracing with `TraceLayer`.
//! - [`cors_layer`]: cross-origin access for browser clients.
//! - [`handle_panic`]: converts a handler panic into a 500 response.

use std::any::Any;

use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Body returned when a handler panics.
pub const PANIC_BODY: &str = "Internal server error";

/// Build a `TraceLayer` for the API.
///
/// Each request gets a tracing span with method, URI, and status code.
pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}

/// Allow any origin to call the schema endpoints with JSON bodies.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Panic handler for `CatchPanicLayer::custom`.
///
/// The panic payload is logged, never returned to the client.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "request handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, PANIC_BODY).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_construct_without_panic() {
        let _trace = trace_layer();
        let _cors = cors_layer();
    }

    #[test]
    fn panic_becomes_internal_server_error() {
        let response = handle_panic(Box::new("store exploded"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(String::from("owned message")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
