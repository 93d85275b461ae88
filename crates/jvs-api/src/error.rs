//! # API Error
//!
//! Maps validation service errors to HTTP status codes and renders them in
//! the response envelope.
//!
//! | Kind | Status |
//! |---|---|
//! | `InvalidJson`, `NotFound`, `ValidationFailed` | 400 |
//! | `AlreadyExists` | 409 |
//! | anything else | 500 |
//!
//! Server-side failures never expose their underlying message: the client
//! gets the kind's generic description and the full error is logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jvs_core::{ErrorKind, SchemaId, ServiceError};
use thiserror::Error;

use crate::response::{Action, Envelope};

/// A service error tied to the request that produced it.
#[derive(Error, Debug)]
#[error("{action} '{schema_id}': {source}")]
pub struct ApiError {
    pub action: Action,
    pub schema_id: SchemaId,
    pub source: ServiceError,
}

impl ApiError {
    pub fn new(action: Action, schema_id: &SchemaId, source: ServiceError) -> Self {
        Self {
            action,
            schema_id: schema_id.clone(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::AlreadyExists => StatusCode::CONFLICT,
            kind if kind.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            tracing::error!(
                action = %self.action,
                schema_id = %self.schema_id,
                kind = %self.kind(),
                detail = %self.source.detail(),
                "schema operation failed"
            );
            self.kind().description().to_string()
        } else {
            tracing::debug!(
                action = %self.action,
                schema_id = %self.schema_id,
                kind = %self.kind(),
                "schema operation rejected"
            );
            self.source.to_string()
        };

        let body = Envelope::error(self.action, &self.schema_id, message);
        (status, Json(body)).into_response()
    }
}
