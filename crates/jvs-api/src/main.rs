//! # jvs-api: Binary Entry Point
//!
//! Starts the Axum HTTP server for the JSON validation service.
//! Binds to a configurable address (default `0.0.0.0:8082`).

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use jvs_api::db::{self, PgSchemaStore};
use jvs_api::{AppConfig, AppState, LogFormat};
use jvs_core::{MemoryStore, SchemaStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    init_tracing(&config);

    // Database pool is optional; absent means in-memory only.
    let db_pool = db::init_pool(&config).await.map_err(|e| {
        tracing::error!("Database initialization failed: {e}");
        e
    })?;

    let store: Arc<dyn SchemaStore> = match &db_pool {
        Some(pool) => Arc::new(PgSchemaStore::new(pool.clone())),
        None => Arc::new(MemoryStore::new()),
    };
    let state = AppState::with_store(store, db_pool.clone(), config.limits());
    let app = jvs_api::app(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("JVS API listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Some(pool) = db_pool {
        pool.close().await;
    }
    tracing::info!("JVS API stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_target(false);
    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

/// Resolves on SIGINT, or on SIGTERM/SIGQUIT where available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match (signal(SignalKind::terminate()), signal(SignalKind::quit())) {
            (Ok(mut term), Ok(mut quit)) => {
                tokio::select! {
                    _ = term.recv() => {}
                    _ = quit.recv() => {}
                }
            }
            (Err(e), _) | (_, Err(e)) => {
                tracing::error!("failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received, draining connections");
}
