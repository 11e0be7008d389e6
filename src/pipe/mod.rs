use async_trait::async_trait;

pub mod builtins;
mod json;
mod path;

pub use builtins::{ParseIdPipe, ProductPayloadPipe};
pub use json::JsonBody;
pub use path::PathId;

pub type PipeResult<T> = Result<T, PipeError>;

#[derive(Debug, thiserror::Error)]
pub enum PipeError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Transformation failed: {0}")]
    Transformation(String),
}

/// The Pipe trait for transformation and validation
///
/// Pipes run on request input before it reaches the service layer; any
/// `PipeError` becomes a `400 Bad Request`.
#[async_trait]
pub trait Pipe: Send + Sync + 'static {
    type Input: Send + 'static;
    type Output: Send + 'static;

    async fn transform(&self, input: Self::Input) -> PipeResult<Self::Output>;
}
