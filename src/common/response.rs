use crate::common::StatusCode;
use axum::{
    Json,
    http::StatusCode as HttpStatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Standard error body
///
/// Successful catalog responses carry the bare product JSON; every failure
/// carries this shape instead.
///
/// # Example
/// ```
/// use catalog::common::{ApiError, StatusCode};
///
/// // Serializes as {"statusCode":404,"code":"NotFound","message":"...","timestamp":"..."}
/// let error = ApiError::new(StatusCode::NotFound, "Product 99 not found");
/// assert_eq!(error.status_code, 404);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub status_code: u16,
    pub code: String,
    pub message: String,
    pub timestamp: String,
}

impl ApiError {
    /// Create an error body
    ///
    /// The `code` is the `StatusCode` variant name, rendered through `strum`.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        let http: HttpStatusCode = status.into();
        Self {
            status_code: http.as_u16(),
            code: status.to_string(),
            message: message.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            HttpStatusCode::from_u16(self.status_code).unwrap_or(HttpStatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
