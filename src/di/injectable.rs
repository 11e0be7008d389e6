use crate::di::Container;
use crate::error::Result;

/// Trait for types that can be built from the DI container
///
/// This trait is typically implemented automatically via `#[derive(Injectable)]`.
/// Every field must be an `Arc<T>` or `Arc<dyn Trait>` already present in the container.
///
/// # Example
/// ```
/// use catalog::prelude::*;
/// use catalog::product::ProductRepository;
///
/// #[derive(Injectable)]
/// pub struct PriceReport {
///     repository: Arc<dyn ProductRepository>,
/// }
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Create an instance by resolving dependencies from the container
    ///
    /// # Errors
    /// Returns an error if any required dependency is not found in the container.
    fn inject(container: &Container) -> Result<Self>;
}
