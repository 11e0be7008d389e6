use catalog::common::ApiError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rejected by server: {0}")]
    BadRequest(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    InvalidForm(String),
}

impl ClientError {
    /// Map a non-success response to an error, preferring the service's error message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiError>(body)
            .map(|error| error.message)
            .unwrap_or_else(|_| body.to_string());

        match status {
            404 => ClientError::NotFound(message),
            400 => ClientError::BadRequest(message),
            _ => ClientError::Status { status, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::common::StatusCode;

    #[test]
    fn reads_service_error_body() {
        let body = serde_json::to_string(&ApiError::new(
            StatusCode::NotFound,
            "Product 99 not found",
        ))
        .unwrap();
        match ClientError::from_response(404, &body) {
            ClientError::NotFound(message) => assert_eq!(message, "Product 99 not found"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn falls_back_to_raw_body() {
        let error = ClientError::from_response(502, "Bad Gateway");
        assert!(matches!(
            error,
            ClientError::Status { status: 502, ref message } if message == "Bad Gateway"
        ));
        assert!(matches!(
            ClientError::from_response(400, ""),
            ClientError::BadRequest(_)
        ));
    }
}
