use crate::api::CatalogApi;
use crate::error::{ClientError, Result};
use crate::form::ProductForm;
use crate::notify::{DELETE_FAILED, LOAD_FAILED, Notifier, SAVE_FAILED};
use catalog::product::{Product, ProductId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Idle,
    Loading,
    Error,
}

/// Product list plus the create/edit form
///
/// Every mutation that succeeds resets the form and reloads the whole list
/// from the service. A failed request raises exactly one notification and
/// leaves the list and form as they were.
pub struct CatalogView<A, N> {
    api: A,
    notifier: N,
    products: Vec<Product>,
    form: ProductForm,
    status: ViewStatus,
}

impl<A: CatalogApi, N: Notifier> CatalogView<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            products: Vec::new(),
            form: ProductForm::new(),
            status: ViewStatus::Idle,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.form.price = price.into();
    }

    /// Back to an empty "new product" form
    pub fn new_product(&mut self) {
        self.form.reset();
    }

    /// Fetch the full list
    pub async fn load(&mut self) -> Result<()> {
        self.status = ViewStatus::Loading;
        match self.api.list().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "Loaded products");
                self.products = products;
                self.status = ViewStatus::Idle;
                Ok(())
            }
            Err(e) => Err(self.fail(LOAD_FAILED, e)),
        }
    }

    /// Create (id 0) or update the product in the form
    pub async fn submit(&mut self) -> Result<()> {
        let payload = match self.form.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.notifier.notify(&e.to_string());
                return Err(e);
            }
        };

        self.status = ViewStatus::Loading;
        let result = if self.form.is_editing() {
            self.api.update(self.form.id, &payload).await
        } else {
            self.api.create(&payload).await
        };

        match result {
            Ok(saved) => {
                tracing::info!(id = saved.id, "Saved product");
                self.form.reset();
                self.load().await
            }
            Err(e) => Err(self.fail(SAVE_FAILED, e)),
        }
    }

    /// Copy a listed product into the form; no request is made
    pub fn edit(&mut self, id: ProductId) -> Result<()> {
        match self.products.iter().find(|p| p.id == id) {
            Some(product) => {
                self.form = ProductForm::edit(product);
                Ok(())
            }
            None => {
                let e = ClientError::InvalidForm(format!("No product #{} in the list.", id));
                self.notifier.notify(&e.to_string());
                Err(e)
            }
        }
    }

    pub async fn delete(&mut self, id: ProductId) -> Result<()> {
        self.status = ViewStatus::Loading;
        match self.api.delete(id).await {
            Ok(()) => {
                tracing::info!(id, "Deleted product");
                self.load().await
            }
            Err(e) => Err(self.fail(DELETE_FAILED, e)),
        }
    }

    fn fail(&mut self, message: &str, error: ClientError) -> ClientError {
        tracing::error!(error = %error, "{}", message);
        self.notifier.notify(message);
        self.status = ViewStatus::Error;
        error
    }
}
