use crate::common::{ApiError, StatusCode};
use crate::error::CatalogError;
use crate::exception::ExceptionFilter;
use crate::interceptor::InterceptorError;
use axum::response::{IntoResponse, Response};

/// Default filter: catalog errors keep their own status, anything else is a 500
#[derive(Default)]
pub struct HttpExceptionFilter;

impl ExceptionFilter for HttpExceptionFilter {
    fn catch(&self, error: InterceptorError) -> Response {
        match error.downcast::<CatalogError>() {
            Ok(catalog_error) => (*catalog_error).into_response(),
            Err(other) => {
                tracing::error!(error = %other, "Unhandled error in request pipeline");
                ApiError::new(StatusCode::InternalServerError, "Internal Server Error")
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_catalog_status() {
        let response = HttpExceptionFilter.catch(Box::new(CatalogError::NotFound { id: 5 }));
        assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn unknown_errors_are_internal() {
        let error: InterceptorError = "socket closed".into();
        let response = HttpExceptionFilter.catch(error);
        assert_eq!(
            response.status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
