use crate::di::{Container, Injectable};
use crate::error::{CatalogError, Result};
use crate::module::Module;

pub mod controller;
#[cfg(feature = "sea-orm-db")]
pub mod entity;
pub mod model;
pub mod repository;
#[cfg(feature = "sea-orm-db")]
mod sea_orm_repository;
pub mod service;

pub use controller::routes;
pub use model::{Product, ProductId, ProductPayload, demo_products};
pub use repository::{InMemoryProductRepository, ProductRepository};
#[cfg(feature = "sea-orm-db")]
pub use sea_orm_repository::SeaOrmProductRepository;
pub use service::ProductService;

/// Registers the product service
///
/// The store itself is infrastructure: the caller registers an implementation
/// and binds it to `dyn ProductRepository` before this module.
pub struct ProductModule;

impl Module for ProductModule {
    fn register(container: &mut Container) -> Result<()> {
        if !container.contains::<dyn ProductRepository>() {
            return Err(CatalogError::ModuleRegistrationFailed {
                message: "ProductModule requires a dyn ProductRepository binding".to_string(),
            });
        }
        let service = ProductService::inject(container)?;
        container.register(service);
        Ok(())
    }
}
