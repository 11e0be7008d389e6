use crate::error::CatalogError;
use crate::pipe::{ParseIdPipe, Pipe};
use crate::product::ProductId;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

/// `{id}` path segment parsed into a [`ProductId`]
///
/// Undecodable segments and non-integers both become `400 Bad Request` with
/// the catalog's error body.
pub struct PathId(pub ProductId);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = CatalogError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| CatalogError::BadRequest(rejection.body_text()))?;
        Ok(PathId(ParseIdPipe.transform(raw).await?))
    }
}
