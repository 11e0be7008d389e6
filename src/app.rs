use crate::config::ServerConfig;
use crate::di::{Container, HasContainer};
use crate::interceptor::{InterceptorLayer, LoggingInterceptor};
use crate::product;
use axum::http::HeaderValue;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Router state: the DI container every handler resolves its services from
#[derive(Clone)]
pub struct AppState {
    container: Arc<Container>,
}

impl AppState {
    pub fn new(container: Arc<Container>) -> Self {
        Self { container }
    }
}

impl HasContainer for AppState {
    fn get_container(&self) -> &Container {
        &self.container
    }
}

/// Assemble the full HTTP surface: product routes, health check, request
/// logging and CORS.
pub fn catalog_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(product::routes())
        .route("/health", get(health))
        .layer(InterceptorLayer::new(vec![Arc::new(LoggingInterceptor)]))
        .layer(cors_layer(&config.cors_origins))
        .with_state(state)
}

/// CORS for the configured client origins only
///
/// Origins that are not valid header values are skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
