use crate::common::{ApiError, StatusCode};
use crate::pipe::PipeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product {id} not found")]
    NotFound { id: i64 },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Dependency not found: {type_name}")]
    DependencyNotFound { type_name: String },

    #[error("Failed to downcast type: {type_name}")]
    DowncastFailed { type_name: String },

    #[error("Module registration failed: {message}")]
    ModuleRegistrationFailed { message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn status(&self) -> StatusCode {
        match self {
            CatalogError::NotFound { .. } => StatusCode::NotFound,
            CatalogError::BadRequest(_) => StatusCode::BadRequest,
            _ => StatusCode::InternalServerError,
        }
    }
}

impl From<PipeError> for CatalogError {
    fn from(err: PipeError) -> Self {
        CatalogError::BadRequest(err.to_string())
    }
}

#[cfg(feature = "sea-orm-db")]
impl From<sea_orm::DbErr> for CatalogError {
    fn from(err: sea_orm::DbErr) -> Self {
        CatalogError::Storage(err.to_string())
    }
}

impl axum::response::IntoResponse for CatalogError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        match status {
            StatusCode::InternalServerError => tracing::error!(error = %self, "request failed"),
            _ => tracing::debug!(error = %self, "request rejected"),
        }
        ApiError::new(status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn maps_errors_to_status_codes() {
        assert_eq!(
            CatalogError::NotFound { id: 99 }.into_response().status(),
            axum::http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::BadRequest("name is required".into())
                .into_response()
                .status(),
            axum::http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatalogError::Storage("disk full".into())
                .into_response()
                .status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn pipe_errors_become_bad_requests() {
        let err: CatalogError = PipeError::Validation("price must not be negative".into()).into();
        assert!(matches!(err, CatalogError::BadRequest(_)));
    }
}
