//! HTTP server initialization and runtime setup.
//!
//! Wires the probe, the batch store, and the link service into the Axum
//! server, and handles signal-driven graceful shutdown.

use crate::application::services::BatchLinkService;
use crate::config::Config;
use crate::infrastructure::persistence::InMemoryBatchRepository;
use crate::infrastructure::probe::HttpLinkChecker;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Outbound HTTP probe client
/// - In-memory batch store
/// - Link service
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The probe client cannot be constructed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let checker = Arc::new(HttpLinkChecker::new(Duration::from_secs(
        config.probe_timeout_secs,
    ))?);
    let repository = Arc::new(InMemoryBatchRepository::new());
    let link_service = Arc::new(BatchLinkService::new(repository.clone(), checker));

    let state = AppState {
        link_service,
        batch_repository: repository,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown completed");
    Ok(())
}

/// Resolves when SIGINT or SIGTERM is received.
///
/// Axum stops accepting new connections and drains in-flight requests
/// before the serve future completes.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Received shutdown signal, starting graceful shutdown...");
}
