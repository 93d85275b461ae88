//! # Validation Route
//!
//! Routes:
//! - POST   /validate/{schema_id}: Validate a JSON object against a stored schema

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::routing::post;
use axum::{Json, Router};
use jvs_core::{SchemaId, ServiceError};

use crate::error::ApiError;
use crate::extractors;
use crate::response::{Action, Envelope};
use crate::routes::within_deadline;
use crate::state::AppState;

/// Build the validation router.
pub fn router() -> Router<AppState> {
    Router::new().route("/validate/{schema_id}", post(validate_payload))
}

/// POST /validate/{schema_id}: 200 if the body satisfies the schema.
async fn validate_payload(
    State(state): State<AppState>,
    Path(schema_id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let schema_id = SchemaId::from(schema_id);
    let action = Action::ValidateSchema;

    let body = extractors::body(body).map_err(|e| ApiError::new(action, &schema_id, e))?;
    let payload = extractors::json_object(&body).map_err(|e| ApiError::new(action, &schema_id, e))?;
    // Normalizing and compiling never suspend; only the schema read can time out.
    within_deadline(
        state.limits.request_timeout,
        ServiceError::DownloadSchema,
        state.service.validate_schema(&schema_id, payload),
    )
    .await
    .map_err(|e| ApiError::new(action, &schema_id, e))?;

    Ok(Json(Envelope::success(action, &schema_id)))
}
