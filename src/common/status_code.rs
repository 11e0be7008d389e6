use axum::http::StatusCode as HttpStatusCode;
use strum_macros::{Display, EnumString};

/// Non-200 status codes the catalog API answers with.
///
/// The `Display` form (via `strum`) is the variant name and is used as the
/// machine-readable `code` in error bodies. `NoContent` is the delete reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum StatusCode {
    NoContent,
    BadRequest,
    NotFound,
    InternalServerError,
}

impl From<StatusCode> for HttpStatusCode {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::NoContent => HttpStatusCode::NO_CONTENT,
            StatusCode::BadRequest => HttpStatusCode::BAD_REQUEST,
            StatusCode::NotFound => HttpStatusCode::NOT_FOUND,
            StatusCode::InternalServerError => HttpStatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_is_variant_name() {
        assert_eq!(StatusCode::NotFound.to_string(), "NotFound");
        assert_eq!(StatusCode::from_str("BadRequest").unwrap(), StatusCode::BadRequest);
    }

    #[test]
    fn converts_to_http() {
        let http: HttpStatusCode = StatusCode::NoContent.into();
        assert_eq!(http.as_u16(), 204);
    }
}
