//! # Schema Store Capability
//!
//! The narrow storage interface the validation service is written against.
//! Implementations translate backend-specific failures into [`StoreError`]
//! themselves: a uniqueness violation becomes `AlreadyExists` and a missing
//! row becomes `NotFound` before the error leaves the store.

use async_trait::async_trait;
use thiserror::Error;

use crate::schema::SchemaId;

/// Error reported by a [`SchemaStore`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A schema with this identifier is already stored.
    #[error("schema '{0}' already exists")]
    AlreadyExists(SchemaId),

    /// No schema is stored under this identifier.
    #[error("schema '{0}' not found")]
    NotFound(SchemaId),

    /// Any other backend failure (connectivity, timeout, cancellation).
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Durable mapping from schema identifier to raw schema text.
///
/// Uniqueness of `schema_id` must be enforced here, atomically: of two
/// concurrent `create` calls for the same identifier exactly one succeeds.
#[async_trait]
pub trait SchemaStore: Send + Sync + 'static {
    /// Persist `schema` under `schema_id`.
    async fn create(&self, schema_id: &SchemaId, schema: &str) -> Result<(), StoreError>;

    /// Fetch the raw schema text stored under `schema_id`.
    async fn get(&self, schema_id: &SchemaId) -> Result<String, StoreError>;
}
