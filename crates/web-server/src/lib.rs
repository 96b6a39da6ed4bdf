use database::Repositories;
use std::net::SocketAddr;
use tokio::signal;
// Note: Tracing is initialized by the binary; this crate only emits events.

pub mod cors;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use routes::router;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub repositories: Repositories,
}

/// Binds `addr` and serves the application until Ctrl+C or SIGTERM.
pub async fn run_server(addr: SocketAddr, repositories: Repositories) -> anyhow::Result<()> {
    let app = router(repositories);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server shut down.");
    Ok(())
}

/// Resolves on Ctrl+C, or on SIGTERM where that exists.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C.");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install the SIGTERM handler.");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("Received Ctrl+C, shutting down."),
        _ = terminate => tracing::warn!("Received SIGTERM, shutting down."),
    }
}
