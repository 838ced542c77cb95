//! HTTP server initialization and runtime setup.
//!
//! Opens the configured store, builds the router, and runs Axum until a
//! shutdown signal arrives.

use crate::config::{Config, StorageBackend};
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::persistence::{InMemoryUrlRepository, SqliteUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Opens the store selected by `config`.
///
/// # Errors
///
/// Returns an error if the SQLite file cannot be opened or its schema cannot
/// be created. The server cannot run without a store.
pub async fn open_repository(config: &Config) -> Result<Arc<dyn UrlRepository>> {
    let repository: Arc<dyn UrlRepository> = match config.storage_backend {
        StorageBackend::Sqlite => {
            let repository = SqliteUrlRepository::connect(&config.sqlite_options())
                .await
                .with_context(|| {
                    format!("Failed to initialize storage at '{}'", config.storage_path)
                })?;
            tracing::info!("Storage initialized (sqlite)");
            Arc::new(repository)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage. Mappings are lost on restart.");
            Arc::new(InMemoryUrlRepository::new())
        }
    };

    Ok(repository)
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Store initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = open_repository(&config).await?;
    let state = AppState::from_repository(repository, config.alias_length);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
