use crate::interceptor::InterceptorError;
use axum::response::Response;

pub mod http;

pub use http::HttpExceptionFilter;

/// Turns an error that escaped the interceptor chain into a response
pub trait ExceptionFilter: Send + Sync + 'static {
    fn catch(&self, error: InterceptorError) -> Response;
}
