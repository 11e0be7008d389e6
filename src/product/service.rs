use super::model::{Product, ProductId, ProductPayload};
use super::repository::ProductRepository;
use crate::prelude::*;

/// Catalog operations on top of the injected product store
#[derive(Injectable)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Product>> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: ProductId) -> Result<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound { id })
    }

    pub async fn create(&self, payload: ProductPayload) -> Result<Product> {
        let product = self.repository.insert(payload).await?;
        tracing::info!(id = product.id, name = %product.name, "Created product");
        Ok(product)
    }

    pub async fn update(&self, id: ProductId, payload: ProductPayload) -> Result<Product> {
        let product = self
            .repository
            .update(id, payload)
            .await?
            .ok_or(CatalogError::NotFound { id })?;
        tracing::info!(id, name = %product.name, "Updated product");
        Ok(product)
    }

    pub async fn delete(&self, id: ProductId) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(CatalogError::NotFound { id });
        }
        tracing::info!(id, "Deleted product");
        Ok(())
    }
}
