//! # Application State
//!
//! Shared state for the Axum application: the validation service, the
//! optional database pool used by the readiness probe, and transport limits.

use std::sync::Arc;

use jvs_core::{MemoryStore, SchemaStore};
use jvs_schema::ValidationService;
use sqlx::PgPool;

use crate::config::RequestLimits;

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: ValidationService,
    /// Present when schemas are persisted in PostgreSQL.
    pub db_pool: Option<PgPool>,
    pub limits: RequestLimits,
}

impl AppState {
    /// State backed by a fresh in-memory store and default limits.
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()), None, RequestLimits::default())
    }

    pub fn with_store(
        store: Arc<dyn SchemaStore>,
        db_pool: Option<PgPool>,
        limits: RequestLimits,
    ) -> Self {
        Self {
            service: ValidationService::new(store),
            db_pool,
            limits,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
