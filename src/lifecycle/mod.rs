//! Application lifecycle
//!
//! ```text
//! 1. Configuration loading
//!    ↓
//! 2. Container creation (store registered + bound to dyn ProductRepository)
//!    ↓
//! 3. Module registration (ProductModule)
//!    ↓
//! 4. OnModuleInit             ← store seeds demo data / creates its table
//!    ↓
//! 5. OnApplicationBootstrap
//!    ↓
//! 6. Server start
//!    ↓
//! 7. Shutdown signal (SIGTERM/SIGINT)
//!    ↓
//! 8. OnApplicationShutdown
//!    ↓
//! 9. OnModuleDestroy          ← store released, reverse order
//! ```

mod application;
mod error;
mod manager;
mod shutdown;
mod traits;

pub use application::{Application, ApplicationBuilder};
pub use error::{LifecycleError, Result};
pub use manager::LifecycleManager;
pub use shutdown::shutdown_signal;
pub use traits::{OnApplicationBootstrap, OnApplicationShutdown, OnModuleDestroy, OnModuleInit};
