use super::model::{Product, ProductPayload};
use super::service::ProductService;
use crate::pipe::{JsonBody, PathId, ProductPayloadPipe};
use crate::prelude::*;
use axum::http::StatusCode as HttpStatusCode;
use axum::routing::get;

pub const PRODUCTS_PATH: &str = "/api/products";
pub const PRODUCT_PATH: &str = "/api/products/{id}";

/// Routes for the product resource
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(PRODUCTS_PATH, get(list).post(create))
        .route(PRODUCT_PATH, get(get_one).put(update).delete(remove))
}

async fn list(Inject(service): Inject<ProductService>) -> Result<Json<Vec<Product>>> {
    Ok(Json(service.list().await?))
}

async fn get_one(
    Inject(service): Inject<ProductService>,
    PathId(id): PathId,
) -> Result<Json<Product>> {
    Ok(Json(service.get(id).await?))
}

async fn create(
    Inject(service): Inject<ProductService>,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> Result<Json<Product>> {
    let payload = ProductPayloadPipe.transform(payload).await?;
    Ok(Json(service.create(payload).await?))
}

async fn update(
    Inject(service): Inject<ProductService>,
    PathId(id): PathId,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> Result<Json<Product>> {
    let payload = ProductPayloadPipe.transform(payload).await?;
    Ok(Json(service.update(id, payload).await?))
}

async fn remove(
    Inject(service): Inject<ProductService>,
    PathId(id): PathId,
) -> Result<HttpStatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NoContent.into())
}
