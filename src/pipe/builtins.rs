use crate::pipe::{Pipe, PipeError, PipeResult};
use crate::product::{ProductId, ProductPayload};
use async_trait::async_trait;

/// Parses a path segment into a product id
///
/// Only the shape is checked here: `"abc"` is rejected, while `"0"` or
/// `"-4"` parse and later resolve to NotFound.
#[derive(Default)]
pub struct ParseIdPipe;

#[async_trait]
impl Pipe for ParseIdPipe {
    type Input = String;
    type Output = ProductId;

    async fn transform(&self, input: String) -> PipeResult<ProductId> {
        input
            .trim()
            .parse::<ProductId>()
            .map_err(|_| PipeError::Transformation(format!("invalid product id: {:?}", input)))
    }
}

/// Validates a deserialized product body
#[derive(Default)]
pub struct ProductPayloadPipe;

#[async_trait]
impl Pipe for ProductPayloadPipe {
    type Input = ProductPayload;
    type Output = ProductPayload;

    async fn transform(&self, input: ProductPayload) -> PipeResult<ProductPayload> {
        if input.name.trim().is_empty() {
            return Err(PipeError::Validation("name must not be empty".to_string()));
        }
        if !input.price.is_finite() {
            return Err(PipeError::Validation("price must be a finite number".to_string()));
        }
        if input.price < 0.0 {
            return Err(PipeError::Validation("price must not be negative".to_string()));
        }
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, price: f64) -> ProductPayload {
        ProductPayload {
            name: name.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn parses_integer_ids() {
        assert_eq!(ParseIdPipe.transform("42".into()).await.unwrap(), 42);
        assert_eq!(ParseIdPipe.transform("-1".into()).await.unwrap(), -1);
        assert!(ParseIdPipe.transform("abc".into()).await.is_err());
        assert!(ParseIdPipe.transform("1.5".into()).await.is_err());
    }

    #[tokio::test]
    async fn accepts_valid_payloads() {
        let ok = ProductPayloadPipe.transform(payload("Laptop", 1500.0)).await.unwrap();
        assert_eq!(ok.name, "Laptop");
        assert!(ProductPayloadPipe.transform(payload("Free sample", 0.0)).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_invalid_payloads() {
        assert!(ProductPayloadPipe.transform(payload("   ", 10.0)).await.is_err());
        assert!(ProductPayloadPipe.transform(payload("Phone", -1.0)).await.is_err());
        assert!(ProductPayloadPipe.transform(payload("Phone", f64::NAN)).await.is_err());
    }
}
