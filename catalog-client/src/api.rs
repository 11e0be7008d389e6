use crate::error::{ClientError, Result};
use async_trait::async_trait;
use catalog::product::{Product, ProductId, ProductPayload};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5001/api/products";

/// The five catalog operations, as seen from the client
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>>;
    async fn get(&self, id: ProductId) -> Result<Product>;
    async fn create(&self, payload: &ProductPayload) -> Result<Product>;
    async fn update(&self, id: ProductId, payload: &ProductPayload) -> Result<Product>;
    async fn delete(&self, id: ProductId) -> Result<()>;
}

#[async_trait]
impl<A: CatalogApi + ?Sized> CatalogApi for Arc<A> {
    async fn list(&self) -> Result<Vec<Product>> {
        (**self).list().await
    }

    async fn get(&self, id: ProductId) -> Result<Product> {
        (**self).get(id).await
    }

    async fn create(&self, payload: &ProductPayload) -> Result<Product> {
        (**self).create(payload).await
    }

    async fn update(&self, id: ProductId, payload: &ProductPayload) -> Result<Product> {
        (**self).update(id, payload).await
    }

    async fn delete(&self, id: ProductId) -> Result<()> {
        (**self).delete(id).await
    }
}

/// `CatalogApi` over HTTP
///
/// `base_url` is the collection URL, e.g. `http://localhost:5001/api/products`.
/// Requests are sent once; there is no retry.
pub struct HttpCatalogApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCatalogApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Build a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: ProductId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::from_response(status.as_u16(), &body))
    }

    async fn parse<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
        let response = Self::check(response).await?;
        Ok(response.json::<R>().await?)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn list(&self) -> Result<Vec<Product>> {
        let response = self.http.get(&self.base_url).send().await?;
        Self::parse(response).await
    }

    async fn get(&self, id: ProductId) -> Result<Product> {
        let response = self.http.get(self.item_url(id)).send().await?;
        Self::parse(response).await
    }

    async fn create(&self, payload: &ProductPayload) -> Result<Product> {
        let response = self.http.post(&self.base_url).json(payload).send().await?;
        Self::parse(response).await
    }

    async fn update(&self, id: ProductId, payload: &ProductPayload) -> Result<Product> {
        let response = self.http.put(self.item_url(id)).json(payload).send().await?;
        Self::parse(response).await
    }

    async fn delete(&self, id: ProductId) -> Result<()> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}
