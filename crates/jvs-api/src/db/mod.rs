//! # Database Persistence Layer
//!
//! PostgreSQL persistence for uploaded schemas via SQLx.
//!
//! The database is **optional**. When `DATABASE_URL` is set, schemas are
//! written to the `schemas` table and survive restarts. When absent, the
//! service keeps them in an in-memory store (suitable for development and
//! testing).

pub mod schemas;

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::AppConfig;

pub use schemas::PgSchemaStore;

/// Initialize the database connection pool and run migrations.
///
/// Returns `None` if no database URL is configured (in-memory mode).
/// Returns `Err` if the URL is set but the connection or migration fails.
pub async fn init_pool(config: &AppConfig) -> Result<Option<PgPool>, sqlx::Error> {
    let Some(url) = config.database_url.as_deref() else {
        tracing::warn!(
            "DATABASE_URL not set, running in-memory only mode. \
             Schemas will not survive restarts."
        );
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(url)
        .await?;

    tracing::info!("Connected to PostgreSQL");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(Some(pool))
}
