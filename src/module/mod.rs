use crate::di::Container;
use crate::error::Result;

/// Trait for application modules
///
/// A module registers its providers into the container, resolving whatever
/// they depend on from registrations made before it.
///
/// # Example
/// ```
/// use catalog::prelude::*;
/// use catalog::product::{InMemoryProductRepository, ProductModule, ProductRepository, ProductService};
///
/// let mut container = ContainerBuilder::new()
///     .register(InMemoryProductRepository::new())
///     .bind::<dyn ProductRepository, InMemoryProductRepository, _>(|r| r as Arc<dyn ProductRepository>)
///     .build();
/// ProductModule::register(&mut container).unwrap();
/// assert!(container.resolve::<ProductService>().is_ok());
/// ```
pub trait Module {
    /// Register all providers in this module
    fn register(container: &mut Container) -> Result<()>;
}
