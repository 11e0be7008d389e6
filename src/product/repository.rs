use super::model::{Product, ProductId, ProductPayload};
use crate::error::Result;
use crate::lifecycle::{
    LifecycleError, OnApplicationBootstrap, OnApplicationShutdown, OnModuleDestroy, OnModuleInit,
};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Storage seam for the product collection
///
/// Handlers only see this trait; the concrete store is chosen when the
/// container is built.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ascending by id.
    async fn find_all(&self) -> Result<Vec<Product>>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>>;

    /// Store a new product under `max(id) + 1` (or 1 when empty).
    async fn insert(&self, payload: ProductPayload) -> Result<Product>;

    /// Returns `None` when no product has `id`.
    async fn update(&self, id: ProductId, payload: ProductPayload) -> Result<Option<Product>>;

    /// Returns `false` when no product has `id`.
    async fn delete(&self, id: ProductId) -> Result<bool>;
}

/// In-memory product store
///
/// All writers are serialized through one `RwLock`, so id assignment and the
/// append happen atomically with respect to other requests.
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
    seed: Vec<ProductPayload>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    /// A store that is filled with `seed` when the module initializes.
    pub fn with_seed(seed: Vec<ProductPayload>) -> Self {
        Self {
            products: RwLock::new(Vec::new()),
            seed,
        }
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }

    fn next_id(products: &[Product]) -> ProductId {
        products.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>> {
        let mut products = self.products.read().await.clone();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, payload: ProductPayload) -> Result<Product> {
        let mut products = self.products.write().await;
        let product = Product::from_payload(Self::next_id(&products), payload);
        products.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: ProductId, payload: ProductPayload) -> Result<Option<Product>> {
        let mut products = self.products.write().await;
        Ok(products.iter_mut().find(|p| p.id == id).map(|product| {
            product.apply(payload);
            product.clone()
        }))
    }

    async fn delete(&self, id: ProductId) -> Result<bool> {
        let mut products = self.products.write().await;
        match products.iter().position(|p| p.id == id) {
            Some(index) => {
                products.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl OnModuleInit for InMemoryProductRepository {
    async fn on_module_init(&self) -> std::result::Result<(), LifecycleError> {
        let mut products = self.products.write().await;
        if products.is_empty() {
            for payload in self.seed.iter().cloned() {
                let product = Product::from_payload(Self::next_id(&products), payload);
                products.push(product);
            }
        }
        tracing::info!(products = products.len(), "In-memory product store ready");
        Ok(())
    }
}

#[async_trait]
impl OnApplicationBootstrap for InMemoryProductRepository {
    async fn on_application_bootstrap(&self) -> std::result::Result<(), LifecycleError> {
        let products = self.len().await;
        tracing::info!(products, "Serving products from memory");
        Ok(())
    }
}

/// Contents are not persisted; the final count is logged before they are dropped.
#[async_trait]
impl OnApplicationShutdown for InMemoryProductRepository {
    async fn on_application_shutdown(&self) -> std::result::Result<(), LifecycleError> {
        let products = self.len().await;
        tracing::info!(products, "Discarding in-memory products on shutdown");
        Ok(())
    }
}

#[async_trait]
impl OnModuleDestroy for InMemoryProductRepository {
    async fn on_module_destroy(&self) -> std::result::Result<(), LifecycleError> {
        let mut products = self.products.write().await;
        tracing::info!(products = products.len(), "Releasing in-memory product store");
        products.clear();
        Ok(())
    }
}
