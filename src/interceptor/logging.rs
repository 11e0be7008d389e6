use crate::interceptor::{Interceptor, InterceptorResult, Next};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderValue, Request},
};
use std::time::Instant;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Logs one event per request and tags the response with a request id
///
/// An incoming `x-request-id` is kept; otherwise a v4 UUID is generated.
#[derive(Clone, Default)]
pub struct LoggingInterceptor;

#[async_trait]
impl Interceptor for LoggingInterceptor {
    async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult {
        let method = request.method().clone();
        let path = request.uri().path().to_string();
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let start = Instant::now();

        tracing::debug!(%request_id, %method, %path, "--> request");

        match next.run(request).await {
            Ok(mut response) => {
                let status = response.status();
                let latency_ms = start.elapsed().as_millis() as u64;
                if status.is_server_error() {
                    tracing::warn!(%request_id, %method, %path, status = status.as_u16(), latency_ms, "<-- response");
                } else {
                    tracing::info!(%request_id, %method, %path, status = status.as_u16(), latency_ms, "<-- response");
                }
                if let Ok(value) = HeaderValue::from_str(&request_id) {
                    response.headers_mut().insert(REQUEST_ID_HEADER, value);
                }
                Ok(response)
            }
            Err(e) => {
                let latency_ms = start.elapsed().as_millis() as u64;
                tracing::error!(%request_id, %method, %path, latency_ms, error = %e, "<-- failed");
                Err(e)
            }
        }
    }
}
