//! Lifecycle hook traits
//!
//! Hooks take `&self`: the same `Arc` instance is shared with the DI
//! container, so implementors keep their mutable state behind their own locks.

use super::LifecycleError;
use async_trait::async_trait;

/// Called before the server starts accepting requests
///
/// Product stores use it to seed demo data or create their table.
///
/// # Example
///
/// ```rust,ignore
/// use catalog::lifecycle::{OnModuleInit, LifecycleError};
///
/// #[async_trait]
/// impl OnModuleInit for SeaOrmProductRepository {
///     async fn on_module_init(&self) -> Result<(), LifecycleError> {
///         self.conn.execute_unprepared(CREATE_TABLE_SQL).await
///             .map_err(|e| LifecycleError::init_failed(e.to_string()))?;
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait OnModuleInit: Send + Sync {
    async fn on_module_init(&self) -> Result<(), LifecycleError>;
}

/// Called once every `OnModuleInit` hook has succeeded
#[async_trait]
pub trait OnApplicationBootstrap: Send + Sync {
    async fn on_application_bootstrap(&self) -> Result<(), LifecycleError>;
}

/// Called when a shutdown signal arrives, before any module is destroyed
#[async_trait]
pub trait OnApplicationShutdown: Send + Sync {
    async fn on_application_shutdown(&self) -> Result<(), LifecycleError>;
}

/// Called last during shutdown to release resources
///
/// Modules are destroyed in **reverse order** of registration.
#[async_trait]
pub trait OnModuleDestroy: Send + Sync {
    async fn on_module_destroy(&self) -> Result<(), LifecycleError>;
}
