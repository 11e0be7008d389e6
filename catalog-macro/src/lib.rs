use proc_macro::TokenStream;

mod injectable;

/// Derive macro for building a struct from the catalog DI container
///
/// Fields of type `Arc<T>` are resolved with `Container::resolve`, fields of
/// type `Arc<dyn Trait>` with `Container::resolve_trait`.
///
/// # Example
/// ```ignore
/// use catalog::prelude::*;
///
/// #[derive(Injectable)]
/// pub struct ProductService {
///     repository: Arc<dyn ProductRepository>,
/// }
/// ```
#[proc_macro_derive(Injectable)]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    injectable::derive_injectable(input)
}
