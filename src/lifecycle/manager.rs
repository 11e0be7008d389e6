//! Lifecycle Manager
//!
//! Keeps the registered hooks and runs them in phase order.

use super::{
    LifecycleError, OnApplicationBootstrap, OnApplicationShutdown, OnModuleDestroy, OnModuleInit,
    Result,
};
use std::sync::Arc;
use std::time::Duration;

struct LifecycleHook<T: ?Sized> {
    service: Arc<T>,
    name: String,
}

impl<T: ?Sized> LifecycleHook<T> {
    fn new(service: Arc<T>, name: impl Into<String>) -> Self {
        Self {
            service,
            name: name.into(),
        }
    }
}

/// Manages lifecycle hooks for all registered services
///
/// Init and bootstrap failures abort startup. Shutdown and destroy failures
/// are logged and the remaining hooks still run.
pub struct LifecycleManager {
    on_init_hooks: Vec<LifecycleHook<dyn OnModuleInit>>,
    on_bootstrap_hooks: Vec<LifecycleHook<dyn OnApplicationBootstrap>>,
    on_shutdown_hooks: Vec<LifecycleHook<dyn OnApplicationShutdown>>,
    on_destroy_hooks: Vec<LifecycleHook<dyn OnModuleDestroy>>,
}

impl Default for LifecycleManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LifecycleManager {
    pub fn new() -> Self {
        Self {
            on_init_hooks: Vec::new(),
            on_bootstrap_hooks: Vec::new(),
            on_shutdown_hooks: Vec::new(),
            on_destroy_hooks: Vec::new(),
        }
    }

    pub fn register_init<T>(&mut self, service: Arc<T>, name: impl Into<String>)
    where
        T: OnModuleInit + 'static,
    {
        self.on_init_hooks.push(LifecycleHook::new(service, name));
    }

    pub fn register_bootstrap<T>(&mut self, service: Arc<T>, name: impl Into<String>)
    where
        T: OnApplicationBootstrap + 'static,
    {
        self.on_bootstrap_hooks
            .push(LifecycleHook::new(service, name));
    }

    pub fn register_shutdown<T>(&mut self, service: Arc<T>, name: impl Into<String>)
    where
        T: OnApplicationShutdown + 'static,
    {
        self.on_shutdown_hooks
            .push(LifecycleHook::new(service, name));
    }

    pub fn register_destroy<T>(&mut self, service: Arc<T>, name: impl Into<String>)
    where
        T: OnModuleDestroy + 'static,
    {
        self.on_destroy_hooks
            .push(LifecycleHook::new(service, name));
    }

    /// Execute all OnModuleInit hooks in registration order
    pub async fn call_module_init(&self) -> Result<()> {
        tracing::info!("Calling OnModuleInit hooks...");

        for hook in &self.on_init_hooks {
            tracing::debug!("Initializing: {}", hook.name);
            hook.service.on_module_init().await.map_err(|e| {
                tracing::error!("OnModuleInit failed for {}: {}", hook.name, e);
                LifecycleError::hook_failed(&hook.name, e.to_string())
            })?;
        }

        tracing::info!(
            "OnModuleInit complete ({} hooks executed)",
            self.on_init_hooks.len()
        );
        Ok(())
    }

    pub async fn call_module_init_with_timeout(&self, timeout: Duration) -> Result<()> {
        tokio::time::timeout(timeout, self.call_module_init())
            .await
            .map_err(|_| {
                LifecycleError::timeout("OnModuleInit", format!("Timeout after {:?}", timeout))
            })?
    }

    /// Execute all OnApplicationBootstrap hooks in registration order
    pub async fn call_application_bootstrap(&self) -> Result<()> {
        for hook in &self.on_bootstrap_hooks {
            tracing::debug!("Bootstrapping: {}", hook.name);
            hook.service.on_application_bootstrap().await.map_err(|e| {
                tracing::error!("OnApplicationBootstrap failed for {}: {}", hook.name, e);
                LifecycleError::hook_failed(&hook.name, e.to_string())
            })?;
        }
        Ok(())
    }

    /// Execute all OnApplicationShutdown hooks in registration order
    pub async fn call_application_shutdown(&self) -> Result<()> {
        for hook in &self.on_shutdown_hooks {
            tracing::debug!("Shutting down: {}", hook.name);
            if let Err(e) = hook.service.on_application_shutdown().await {
                tracing::error!("OnApplicationShutdown failed for {}: {}", hook.name, e);
            }
        }
        Ok(())
    }

    /// Execute all OnModuleDestroy hooks in **reverse** registration order
    pub async fn call_module_destroy(&self) -> Result<()> {
        tracing::info!("Calling OnModuleDestroy hooks...");

        for hook in self.on_destroy_hooks.iter().rev() {
            tracing::debug!("Destroying: {}", hook.name);
            if let Err(e) = hook.service.on_module_destroy().await {
                tracing::error!("OnModuleDestroy failed for {}: {}", hook.name, e);
            }
        }

        tracing::info!(
            "OnModuleDestroy complete ({} hooks executed)",
            self.on_destroy_hooks.len()
        );
        Ok(())
    }

    pub fn init_hook_count(&self) -> usize {
        self.on_init_hooks.len()
    }

    pub fn bootstrap_hook_count(&self) -> usize {
        self.on_bootstrap_hooks.len()
    }

    pub fn shutdown_hook_count(&self) -> usize {
        self.on_shutdown_hooks.len()
    }

    pub fn destroy_hook_count(&self) -> usize {
        self.on_destroy_hooks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Default)]
    struct TrackedStore {
        initialized: AtomicBool,
        bootstrapped: AtomicBool,
        shutdown: AtomicBool,
        destroyed: AtomicBool,
    }

    #[async_trait::async_trait]
    impl OnModuleInit for TrackedStore {
        async fn on_module_init(&self) -> Result<()> {
            self.initialized.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl OnApplicationBootstrap for TrackedStore {
        async fn on_application_bootstrap(&self) -> Result<()> {
            self.bootstrapped.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl OnApplicationShutdown for TrackedStore {
        async fn on_application_shutdown(&self) -> Result<()> {
            self.shutdown.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl OnModuleDestroy for TrackedStore {
        async fn on_module_destroy(&self) -> Result<()> {
            self.destroyed.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_lifecycle_hooks() {
        let store = Arc::new(TrackedStore::default());

        let mut manager = LifecycleManager::new();
        manager.register_init(Arc::clone(&store), "TrackedStore");
        manager.register_bootstrap(Arc::clone(&store), "TrackedStore");
        manager.register_shutdown(Arc::clone(&store), "TrackedStore");
        manager.register_destroy(Arc::clone(&store), "TrackedStore");

        manager.call_module_init().await.unwrap();
        assert!(store.initialized.load(Ordering::SeqCst));

        manager.call_application_bootstrap().await.unwrap();
        assert!(store.bootstrapped.load(Ordering::SeqCst));

        manager.call_application_shutdown().await.unwrap();
        assert!(store.shutdown.load(Ordering::SeqCst));

        manager.call_module_destroy().await.unwrap();
        assert!(store.destroyed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_destroy_reverse_order() {
        let order = Arc::new(Mutex::new(Vec::new()));

        struct OrderedService {
            id: usize,
            order: Arc<Mutex<Vec<usize>>>,
        }

        #[async_trait::async_trait]
        impl OnModuleDestroy for OrderedService {
            async fn on_module_destroy(&self) -> Result<()> {
                self.order.lock().unwrap().push(self.id);
                Ok(())
            }
        }

        let mut manager = LifecycleManager::new();
        for i in 0..3 {
            let service = Arc::new(OrderedService {
                id: i,
                order: Arc::clone(&order),
            });
            manager.register_destroy(service, format!("Service{}", i));
        }

        manager.call_module_destroy().await.unwrap();
        assert_eq!(*order.lock().unwrap(), vec![2, 1, 0]);
    }

    #[tokio::test]
    async fn test_init_failure_is_reported() {
        struct BrokenStore;

        #[async_trait::async_trait]
        impl OnModuleInit for BrokenStore {
            async fn on_module_init(&self) -> Result<()> {
                Err(LifecycleError::init_failed("connection refused"))
            }
        }

        let mut manager = LifecycleManager::new();
        manager.register_init(Arc::new(BrokenStore), "BrokenStore");
        let err = manager.call_module_init().await.unwrap_err();
        assert!(matches!(err, LifecycleError::HookFailed { .. }));
    }
}
