use crate::error::CatalogError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body extractor that rejects with `400 Bad Request`
///
/// axum's own `Json` answers 415 or 422 for some malformed bodies; the
/// catalog reports every body it cannot read as a bad request.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = CatalogError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(CatalogError::BadRequest(rejection.body_text())),
        }
    }
}
