use serde::{Deserialize, Serialize};

pub type ProductId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

/// Body of create and update requests
///
/// An `id` sent by the client is ignored; the service owns id assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
}

impl ProductPayload {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl Product {
    pub fn from_payload(id: ProductId, payload: ProductPayload) -> Self {
        Self {
            id,
            name: payload.name,
            price: payload.price,
        }
    }

    /// Overwrite name and price; the id is left untouched.
    pub fn apply(&mut self, payload: ProductPayload) {
        self.name = payload.name;
        self.price = payload.price;
    }
}

/// Products the reference deployment starts with.
pub fn demo_products() -> Vec<ProductPayload> {
    vec![
        ProductPayload::new("Laptop", 1500.0),
        ProductPayload::new("Phone", 800.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_ignores_client_id() {
        let payload: ProductPayload =
            serde_json::from_str(r#"{"id": 7, "name": "Laptop", "price": 1500}"#).unwrap();
        assert_eq!(payload, ProductPayload::new("Laptop", 1500.0));
    }

    #[test]
    fn payload_requires_both_fields() {
        assert!(serde_json::from_str::<ProductPayload>(r#"{"name": "Laptop"}"#).is_err());
        assert!(serde_json::from_str::<ProductPayload>(r#"{"price": 10}"#).is_err());
        assert!(serde_json::from_str::<ProductPayload>(r#"{"name": "x", "price": "10"}"#).is_err());
    }

    #[test]
    fn product_json_shape() {
        let product = Product::from_payload(1, ProductPayload::new("Laptop", 1500.0));
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "Laptop", "price": 1500.0}));
    }

    #[test]
    fn apply_keeps_id() {
        let mut product = Product::from_payload(3, ProductPayload::new("Laptop", 1500.0));
        product.apply(ProductPayload::new("Phone", 800.0));
        assert_eq!(product.id, 3);
        assert_eq!(product.name, "Phone");
    }
}
