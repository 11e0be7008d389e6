//! Application bootstrap

use super::{
    LifecycleError, LifecycleManager, OnApplicationBootstrap, OnApplicationShutdown,
    OnModuleDestroy, OnModuleInit, Result,
};
use crate::di::Container;
use std::sync::Arc;
use std::time::Duration;

/// A fully initialized catalog: the container plus the hooks that tear it down
///
/// # Example
///
/// ```rust,ignore
/// let store = Arc::new(InMemoryProductRepository::with_seed(demo_products()));
/// let app = Application::builder()
///     .container(container)
///     .register_lifecycle(Arc::clone(&store), "InMemoryProductRepository")
///     .init_timeout(Duration::from_secs(30))
///     .build()
///     .await?;
///
/// // serve...
///
/// app.shutdown().await?;
/// ```
pub struct Application {
    container: Arc<Container>,
    lifecycle_manager: Arc<LifecycleManager>,
}

impl Application {
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::new()
    }

    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }

    pub fn lifecycle_manager(&self) -> &Arc<LifecycleManager> {
        &self.lifecycle_manager
    }

    /// Run OnApplicationShutdown then OnModuleDestroy hooks
    pub async fn shutdown(&self) -> Result<()> {
        tracing::info!("Shutting down application...");

        self.lifecycle_manager.call_application_shutdown().await?;
        self.lifecycle_manager.call_module_destroy().await?;

        tracing::info!("Application shutdown complete");
        Ok(())
    }
}

pub struct ApplicationBuilder {
    container: Option<Container>,
    lifecycle_manager: LifecycleManager,
    init_timeout: Option<Duration>,
}

impl Default for ApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self {
            container: None,
            lifecycle_manager: LifecycleManager::new(),
            init_timeout: None,
        }
    }

    pub fn container(mut self, container: Container) -> Self {
        self.container = Some(container);
        self
    }

    /// Bound the time OnModuleInit hooks may take (e.g. a database that never answers)
    pub fn init_timeout(mut self, timeout: Duration) -> Self {
        self.init_timeout = Some(timeout);
        self
    }

    pub fn on_init<T>(mut self, service: Arc<T>, name: impl Into<String>) -> Self
    where
        T: OnModuleInit + 'static,
    {
        self.lifecycle_manager.register_init(service, name);
        self
    }

    pub fn on_bootstrap<T>(mut self, service: Arc<T>, name: impl Into<String>) -> Self
    where
        T: OnApplicationBootstrap + 'static,
    {
        self.lifecycle_manager.register_bootstrap(service, name);
        self
    }

    pub fn on_shutdown<T>(mut self, service: Arc<T>, name: impl Into<String>) -> Self
    where
        T: OnApplicationShutdown + 'static,
    {
        self.lifecycle_manager.register_shutdown(service, name);
        self
    }

    pub fn on_destroy<T>(mut self, service: Arc<T>, name: impl Into<String>) -> Self
    where
        T: OnModuleDestroy + 'static,
    {
        self.lifecycle_manager.register_destroy(service, name);
        self
    }

    /// Register a service for all four hooks
    pub fn register_lifecycle<T>(self, service: Arc<T>, name: impl Into<String>) -> Self
    where
        T: OnModuleInit
            + OnApplicationBootstrap
            + OnApplicationShutdown
            + OnModuleDestroy
            + 'static,
    {
        let name = name.into();
        self.on_init(Arc::clone(&service), name.clone())
            .on_bootstrap(Arc::clone(&service), name.clone())
            .on_shutdown(Arc::clone(&service), name.clone())
            .on_destroy(service, name)
    }

    /// Run OnModuleInit then OnApplicationBootstrap hooks and hand back the application
    ///
    /// # Errors
    ///
    /// Returns an error if no container was provided or any hook fails.
    pub async fn build(self) -> Result<Application> {
        let container = self
            .container
            .ok_or_else(|| LifecycleError::init_failed("Container not provided"))?;

        tracing::info!("Starting application initialization...");

        if let Some(timeout) = self.init_timeout {
            self.lifecycle_manager
                .call_module_init_with_timeout(timeout)
                .await?;
        } else {
            self.lifecycle_manager.call_module_init().await?;
        }
        self.lifecycle_manager.call_application_bootstrap().await?;

        tracing::info!("Application initialization complete");

        Ok(Application {
            container: Arc::new(container),
            lifecycle_manager: Arc::new(self.lifecycle_manager),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{InMemoryProductRepository, ProductPayload, ProductRepository};

    #[tokio::test]
    async fn builds_seeds_and_tears_down_store() {
        let store = Arc::new(InMemoryProductRepository::with_seed(vec![
            ProductPayload::new("Laptop", 1500.0),
        ]));
        let mut container = Container::new();
        container.register_arc(Arc::clone(&store));

        let app = Application::builder()
            .container(container)
            .register_lifecycle(Arc::clone(&store), "InMemoryProductRepository")
            .init_timeout(Duration::from_secs(5))
            .build()
            .await
            .unwrap();

        assert_eq!(store.find_all().await.unwrap().len(), 1);
        assert_eq!(app.lifecycle_manager().init_hook_count(), 1);
        assert_eq!(app.lifecycle_manager().bootstrap_hook_count(), 1);
        assert_eq!(app.lifecycle_manager().shutdown_hook_count(), 1);
        assert_eq!(app.lifecycle_manager().destroy_hook_count(), 1);

        app.shutdown().await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn build_requires_container() {
        let result = Application::builder().build().await;
        assert!(matches!(
            result,
            Err(LifecycleError::InitializationFailed(_))
        ));
    }

    #[tokio::test]
    async fn init_timeout_aborts_startup() {
        struct SlowStore;

        #[async_trait::async_trait]
        impl OnModuleInit for SlowStore {
            async fn on_module_init(&self) -> Result<()> {
                tokio::time::sleep(Duration::from_secs(10)).await;
                Ok(())
            }
        }

        let result = Application::builder()
            .container(Container::new())
            .on_init(Arc::new(SlowStore), "SlowStore")
            .init_timeout(Duration::from_millis(20))
            .build()
            .await;
        assert!(matches!(result, Err(LifecycleError::Timeout { .. })));
    }
}
