//! Schema persistence operations.
//!
//! All functions take a `&PgPool` and operate on the `schemas` table.
//! Uniqueness of `schema_id` is enforced by the table constraint, so two
//! concurrent uploads of the same id cannot both succeed.

use async_trait::async_trait;
use jvs_core::{SchemaId, SchemaRecord, SchemaStore, StoreError};
use sqlx::PgPool;

/// Insert a new schema record.
pub async fn insert(pool: &PgPool, record: &SchemaRecord) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO schemas (id, schema_id, schema_text, created_at)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(record.id)
    .bind(record.schema_id.as_str())
    .bind(&record.schema)
    .bind(record.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Fetch the stored text of a schema.
pub async fn get_schema(pool: &PgPool, schema_id: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT schema_text FROM schemas WHERE schema_id = $1")
        .bind(schema_id)
        .fetch_optional(pool)
        .await
}

/// Map an insert failure onto the store contract.
fn classify_insert_error(err: sqlx::Error, schema_id: &SchemaId) -> StoreError {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::AlreadyExists(schema_id.clone())
        }
        other => StoreError::Backend(other.to_string()),
    }
}

/// [`SchemaStore`] backed by the `schemas` table.
#[derive(Debug, Clone)]
pub struct PgSchemaStore {
    pool: PgPool,
}

impl PgSchemaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchemaStore for PgSchemaStore {
    async fn create(&self, schema_id: &SchemaId, schema: &str) -> Result<(), StoreError> {
        let record = SchemaRecord::new(schema_id.clone(), schema);
        insert(&self.pool, &record)
            .await
            .map_err(|e| classify_insert_error(e, schema_id))?;
        tracing::debug!(schema_id = %schema_id, id = %record.id, "schema row inserted");
        Ok(())
    }

    async fn get(&self, schema_id: &SchemaId) -> Result<String, StoreError> {
        get_schema(&self.pool, schema_id.as_str())
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .ok_or_else(|| StoreError::NotFound(schema_id.clone()))
    }
}
