use anyhow::Context;
use catalog::app::catalog_router;
use catalog::config::{ConfigService, ServerConfig};
use catalog::prelude::*;
use tracing_subscriber::EnvFilter;

mod bootstrap;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the process environment still applies.
    let _ = dotenvy::dotenv();

    let config = ServerConfig::from_config(&ConfigService::new())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!("Starting catalog server...");

    let app = bootstrap::build_application(&config).await?;

    let state = AppState::new(Arc::clone(app.container()));
    let router = catalog_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    let addr = listener.local_addr()?;

    tracing::info!(%addr, origins = ?config.cors_origins, "Catalog API listening on /api/products");

    bootstrap::serve(listener, router, app, async {
        shutdown_signal().await;
        tracing::info!("Initiating graceful shutdown...");
    })
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}
