//! # jvs-api: JSON Validation Service HTTP API
//!
//! The HTTP surface of the JSON validation service, built on Axum/Tower/Tokio.
//!
//! ## Routes
//!
//! - `POST /schema/{schema_id}`: upload a schema (create-only)
//! - `GET /schema/{schema_id}`: download a stored schema
//! - `POST /validate/{schema_id}`: validate a JSON object against a schema
//! - `/health/*`: liveness and readiness probes
//!
//! ## Middleware Stack (Tower)
//!
//! TraceLayer → CORS → CatchPanic → BodyLimit → Handler
//!
//! The request deadline is enforced inside each handler so that an expired
//! request still answers with the response envelope.
//!
//! ## Crate Policy
//!
//! - Sits at the top of the dependency DAG.
//! - No business logic in route handlers; they delegate to
//!   [`jvs_schema::ValidationService`].
//! - All errors map to the response envelope via [`ApiError`].

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

pub use config::{AppConfig, LogFormat, RequestLimits};
pub use error::ApiError;
pub use response::{Action, Envelope, Status};
pub use state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes are mounted outside the body-limit and panic layers.
pub fn app(state: AppState) -> Router {
    // Layers wrap outward: the last one added runs first.
    let api = Router::new()
        .merge(routes::schema::router())
        .merge(routes::validate::router())
        .layer(DefaultBodyLimit::max(state.limits.body_limit_bytes))
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(middleware::cors_layer());

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new()
        .merge(health)
        .merge(api)
        .layer(middleware::trace_layer())
        .with_state(state)
}

/// Liveness probe: the process is up.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: returns 200 "ready", or 503 when the configured
/// database does not answer.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if let Some(pool) = &state.db_pool {
        if let Err(e) = sqlx::query("SELECT 1").execute(pool).await {
            tracing::warn!("Database health check failed: {e}");
            return (StatusCode::SERVICE_UNAVAILABLE, "database unreachable").into_response();
        }
    }
    (StatusCode::OK, "ready").into_response()
}
