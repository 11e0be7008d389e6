use anyhow::Context;
use axum::Router;
use catalog::config::{ServerConfig, StoreKind};
use catalog::prelude::*;
use catalog::product::{
    InMemoryProductRepository, ProductModule, ProductRepository, demo_products,
};
use std::future::Future;
use tokio::net::TcpListener;

/// Build the container for the configured store and run its init hooks
pub async fn build_application(config: &ServerConfig) -> anyhow::Result<Application> {
    let (mut container, builder) = match config.store {
        StoreKind::Memory => memory_store(config),
        StoreKind::Database => database_store(config).await?,
    };

    ProductModule::register(&mut container).context("failed to register ProductModule")?;

    let app = builder
        .container(container)
        .init_timeout(config.init_timeout)
        .build()
        .await
        .context("failed to initialize application")?;
    Ok(app)
}

/// Serve until `signal` resolves, then run the shutdown and destroy hooks
///
/// The hooks run only after axum has stopped accepting and drained in-flight
/// requests, so no handler sees a released store.
pub async fn serve<F>(
    listener: TcpListener,
    router: Router,
    app: Application,
    signal: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(signal)
        .await
        .context("server error")?;

    tracing::info!("Connections drained");
    app.shutdown().await.context("shutdown hooks failed")?;
    Ok(())
}

fn memory_store(config: &ServerConfig) -> (Container, ApplicationBuilder) {
    let seed = if config.seed_demo {
        demo_products()
    } else {
        Vec::new()
    };
    tracing::info!(seeded = seed.len(), "Using in-memory product store");

    let store = Arc::new(InMemoryProductRepository::with_seed(seed));
    let container = ContainerBuilder::new()
        .register_arc(Arc::clone(&store))
        .bind::<dyn ProductRepository, InMemoryProductRepository, _>(|r| {
            r as Arc<dyn ProductRepository>
        })
        .build();
    let builder = Application::builder().register_lifecycle(store, "InMemoryProductRepository");
    (container, builder)
}

#[cfg(feature = "sea-orm-db")]
async fn database_store(config: &ServerConfig) -> anyhow::Result<(Container, ApplicationBuilder)> {
    use catalog::product::SeaOrmProductRepository;

    let url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the database store")?;
    tracing::info!("Using relational product store");

    let store = Arc::new(SeaOrmProductRepository::connect(url).await?);
    let container = ContainerBuilder::new()
        .register_arc(Arc::clone(&store))
        .bind::<dyn ProductRepository, SeaOrmProductRepository, _>(|r| {
            r as Arc<dyn ProductRepository>
        })
        .build();
    let builder = Application::builder().register_lifecycle(store, "SeaOrmProductRepository");
    Ok((container, builder))
}

#[cfg(not(feature = "sea-orm-db"))]
async fn database_store(_config: &ServerConfig) -> anyhow::Result<(Container, ApplicationBuilder)> {
    anyhow::bail!("CATALOG_STORE=database needs catalog-server built with the `sea-orm-db` feature")
}
