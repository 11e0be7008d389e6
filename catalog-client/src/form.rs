use crate::error::{ClientError, Result};
use catalog::product::{Product, ProductId, ProductPayload};

/// The single create/edit form
///
/// `id == 0` means a new product; any other id means that product is being
/// edited. The price is kept as typed and only parsed on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub id: ProductId,
    pub name: String,
    pub price: String,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy a listed product into the form
    pub fn edit(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.to_string(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id != 0
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Update" } else { "Add" }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Validate the fields and build the request body
    ///
    /// # Errors
    ///
    /// `ClientError::InvalidForm` for a blank name or a price that is not a
    /// non-negative number.
    pub fn to_payload(&self) -> Result<ProductPayload> {
        if self.name.trim().is_empty() {
            return Err(ClientError::InvalidForm("Name is required.".to_string()));
        }

        let price = self.price.trim();
        if price.is_empty() {
            return Err(ClientError::InvalidForm("Price is required.".to_string()));
        }
        let price: f64 = price
            .parse()
            .map_err(|_| ClientError::InvalidForm(format!("'{}' is not a valid price.", price)))?;
        if !price.is_finite() || price < 0.0 {
            return Err(ClientError::InvalidForm(format!(
                "'{}' is not a valid price.",
                self.price.trim()
            )));
        }

        Ok(ProductPayload::new(self.name.clone(), price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_adds() {
        let form = ProductForm::new();
        assert_eq!(form.id, 0);
        assert!(!form.is_editing());
        assert_eq!(form.submit_label(), "Add");
    }

    #[test]
    fn edit_copies_row() {
        let form = ProductForm::edit(&Product {
            id: 3,
            name: "Laptop".into(),
            price: 1500.0,
        });
        assert_eq!(form.name, "Laptop");
        assert_eq!(form.price, "1500");
        assert_eq!(form.submit_label(), "Update");
    }

    #[test]
    fn payload_parses_price() {
        let form = ProductForm {
            id: 0,
            name: "Phone".into(),
            price: " 799.5 ".into(),
        };
        assert_eq!(form.to_payload().unwrap(), ProductPayload::new("Phone", 799.5));
    }

    #[test]
    fn payload_refuses_bad_fields() {
        let cases = [("", "10"), ("   ", "10"), ("Phone", ""), ("Phone", "cheap"), ("Phone", "-1"), ("Phone", "NaN")];
        for (name, price) in cases {
            let form = ProductForm {
                id: 0,
                name: name.into(),
                price: price.into(),
            };
            assert!(
                matches!(form.to_payload(), Err(ClientError::InvalidForm(_))),
                "{name:?} / {price:?}"
            );
        }
    }

    #[test]
    fn reset_returns_to_new() {
        let mut form = ProductForm {
            id: 4,
            name: "x".into(),
            price: "1".into(),
        };
        form.reset();
        assert_eq!(form, ProductForm::new());
    }
}
