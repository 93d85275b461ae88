//! # Validation Service
//!
//! The three operations the transport layer calls: upload a schema,
//! download it again, and validate a payload against it.
//!
//! The service holds no mutable state of its own. Everything it remembers
//! lives in the [`SchemaStore`], so concurrent calls are exactly as safe as
//! the store's own guarantees. Store failures are classified into
//! [`ServiceError`] kinds here and returned, never logged and dropped.

use std::sync::Arc;

use jvs_core::{SchemaId, SchemaStore, ServiceError, StoreError};
use serde::de::IgnoredAny;
use serde_json::{Map, Value};

use crate::normalize::strip_nulls;
use crate::validate::SchemaCompiler;

/// Orchestrates the schema store, the payload normalizer and the compiler.
#[derive(Clone)]
pub struct ValidationService {
    store: Arc<dyn SchemaStore>,
    compiler: SchemaCompiler,
}

impl std::fmt::Debug for ValidationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationService").finish_non_exhaustive()
    }
}

impl ValidationService {
    pub fn new(store: Arc<dyn SchemaStore>) -> Self {
        Self {
            store,
            compiler: SchemaCompiler::new(),
        }
    }

    /// Store `schema` under `schema_id`.
    ///
    /// The text only has to be well-formed JSON; whether it is a usable
    /// schema is not checked until a payload is validated against it.
    ///
    /// # Errors
    ///
    /// - `InvalidJson` if `schema` does not parse. The store is not touched.
    /// - `AlreadyExists` if `schema_id` is taken.
    /// - `CreateSchema` for any other store failure.
    #[tracing::instrument(level = "debug", skip(self, schema), fields(schema_id = %schema_id))]
    pub async fn upload_schema(
        &self,
        schema_id: &SchemaId,
        schema: &str,
    ) -> Result<(), ServiceError> {
        serde_json::from_str::<IgnoredAny>(schema)
            .map_err(|e| ServiceError::InvalidJson(e.to_string()))?;

        self.store
            .create(schema_id, schema)
            .await
            .map_err(|e| match &e {
                StoreError::AlreadyExists(id) => ServiceError::AlreadyExists(id.to_string()),
                StoreError::NotFound(_) | StoreError::Backend(_) => {
                    ServiceError::CreateSchema(e.to_string())
                }
            })
    }

    /// Fetch the schema text stored under `schema_id`, byte-for-byte.
    ///
    /// # Errors
    ///
    /// - `NotFound` if nothing is stored under `schema_id`.
    /// - `DownloadSchema` for any other store failure.
    #[tracing::instrument(level = "debug", skip(self), fields(schema_id = %schema_id))]
    pub async fn download_schema(&self, schema_id: &SchemaId) -> Result<String, ServiceError> {
        self.store.get(schema_id).await.map_err(|e| match &e {
            StoreError::NotFound(id) => ServiceError::NotFound(id.to_string()),
            StoreError::AlreadyExists(_) | StoreError::Backend(_) => {
                ServiceError::DownloadSchema(e.to_string())
            }
        })
    }

    /// Validate `payload` against the schema stored under `schema_id`.
    ///
    /// Null-valued keys are stripped from the payload's objects first, so a
    /// `required` property sent as `null` counts as missing.
    ///
    /// # Errors
    ///
    /// - `NotFound` / `DownloadSchema` exactly as [`Self::download_schema`].
    /// - `ValidateSchema` if the stored schema does not compile.
    /// - `ValidationFailed` if the payload breaks any constraint; the message
    ///   lists every violation.
    #[tracing::instrument(level = "debug", skip(self, payload), fields(schema_id = %schema_id))]
    pub async fn validate_schema(
        &self,
        schema_id: &SchemaId,
        mut payload: Map<String, Value>,
    ) -> Result<(), ServiceError> {
        strip_nulls(&mut payload);
        let instance = Value::Object(payload);

        let schema = self.download_schema(schema_id).await?;

        let compiled = self
            .compiler
            .compile(schema_id, &schema)
            .map_err(|e| ServiceError::ValidateSchema(e.to_string()))?;

        compiled.validate(&instance).map_err(|violations| {
            tracing::debug!(violations = violations.len(), "payload rejected");
            ServiceError::ValidationFailed(violations.to_string())
        })
    }
}
