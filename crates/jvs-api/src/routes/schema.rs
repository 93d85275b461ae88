//! # Schema Routes
//!
//! Routes:
//! - POST   /schema/{schema_id}: Upload a schema (create-only)
//! - GET    /schema/{schema_id}: Download a stored schema verbatim

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use jvs_core::{SchemaId, ServiceError};
use serde_json::Value;

use crate::error::ApiError;
use crate::extractors;
use crate::response::{Action, Envelope};
use crate::routes::within_deadline;
use crate::state::AppState;

/// Build the schema router.
pub fn router() -> Router<AppState> {
    Router::new().route("/schema/{schema_id}", post(upload_schema).get(download_schema))
}

/// POST /schema/{schema_id}: Store the request body as a schema.
async fn upload_schema(
    State(state): State<AppState>,
    Path(schema_id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Envelope>), ApiError> {
    let schema_id = SchemaId::from(schema_id);
    let action = Action::UploadSchema;

    let body = extractors::body(body).map_err(|e| ApiError::new(action, &schema_id, e))?;
    let schema = extractors::schema_text(&body).map_err(|e| ApiError::new(action, &schema_id, e))?;
    within_deadline(
        state.limits.request_timeout,
        ServiceError::CreateSchema,
        state.service.upload_schema(&schema_id, schema),
    )
    .await
    .map_err(|e| ApiError::new(action, &schema_id, e))?;

    tracing::info!(schema_id = %schema_id, bytes = body.len(), "schema uploaded");
    Ok((StatusCode::CREATED, Json(Envelope::success(action, &schema_id))))
}

/// GET /schema/{schema_id}: Return the stored schema text as `payload`.
async fn download_schema(
    State(state): State<AppState>,
    Path(schema_id): Path<String>,
) -> Result<Json<Envelope>, ApiError> {
    let schema_id = SchemaId::from(schema_id);
    let action = Action::DownloadSchema;

    let schema = within_deadline(
        state.limits.request_timeout,
        ServiceError::DownloadSchema,
        state.service.download_schema(&schema_id),
    )
    .await
    .map_err(|e| ApiError::new(action, &schema_id, e))?;

    Ok(Json(
        Envelope::success(action, &schema_id).with_payload(Value::String(schema)),
    ))
}
