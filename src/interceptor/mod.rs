use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response};
use std::future::Future;
use std::pin::Pin;

mod layer;
mod logging;

pub use layer::{InterceptorLayer, InterceptorMiddleware};
pub use logging::{LoggingInterceptor, REQUEST_ID_HEADER};

/// Standard return type for Interceptors
pub type InterceptorResult = Result<Response, InterceptorError>;

/// A type-erased error for interceptors
pub type InterceptorError = Box<dyn std::error::Error + Send + Sync>;

pub type NextFuture = Pin<Box<dyn Future<Output = InterceptorResult> + Send>>;

/// The rest of the chain after the current interceptor
pub struct Next {
    run: Box<dyn FnOnce(Request<Body>) -> NextFuture + Send>,
}

impl Next {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(Request<Body>) -> NextFuture + Send + 'static,
    {
        Self { run: Box::new(f) }
    }

    /// Execute the next handler
    pub async fn run(self, request: Request<Body>) -> InterceptorResult {
        (self.run)(request).await
    }
}

/// Wraps every request passing through an [`InterceptorLayer`]
///
/// An interceptor may inspect or modify the request, call `next.run(request)`,
/// then inspect or modify the response. An `Err` is turned into a response by
/// the layer's exception filter.
///
/// # Example
/// ```
/// use catalog::interceptor::{Interceptor, InterceptorResult, Next};
/// use catalog::async_trait;
/// use axum::{body::Body, http::Request};
///
/// struct ServerHeader;
///
/// #[async_trait]
/// impl Interceptor for ServerHeader {
///     async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult {
///         let mut response = next.run(request).await?;
///         response.headers_mut().insert("server", "catalog".parse().unwrap());
///         Ok(response)
///     }
/// }
/// ```
#[async_trait]
pub trait Interceptor: Send + Sync + 'static {
    async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult;
}
