//! Shutdown signal handling

use tokio::signal;

/// Resolves when the process receives Ctrl+C or SIGTERM
///
/// Meant for `axum::serve(..).with_graceful_shutdown(..)`; if a signal
/// handler cannot be installed that branch simply never fires.
///
/// ```rust,ignore
/// axum::serve(listener, router)
///     .with_graceful_shutdown(async move {
///         shutdown_signal().await;
///         app.shutdown().await.ok();
///     })
///     .await?;
/// ```
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }
}
