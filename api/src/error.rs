//! Translation of domain failures into HTTP responses.
//!
//! Domain services raise typed errors; this module maps each to a status
//! code and a `{"error": "<message>"}` body. Nothing beyond the short
//! message ever reaches the client.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use rw_core::errors::DomainError;
use rw_shared::types::ErrorBody;

/// Error type returned by all REST handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Transport-level input failure with a fixed message, e.g. an
    /// unparseable path id or a structurally incomplete login body
    #[error("{0}")]
    BadRequest(&'static str),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Domain(err) => match err {
                DomainError::Validation { .. }
                | DomainError::DuplicateEmail
                | DomainError::MissingField { .. } => StatusCode::BAD_REQUEST,
                DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                DomainError::InvalidCredentials
                | DomainError::Unauthorized
                | DomainError::Token(_) => StatusCode::UNAUTHORIZED,
                DomainError::Forbidden => StatusCode::FORBIDDEN,
                DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_matches_contract() {
        let cases = [
            (ApiError::from(DomainError::DuplicateEmail), 400),
            (ApiError::from(DomainError::MissingField { field: "Car" }), 400),
            (ApiError::from(DomainError::NotFound { resource: "Rental" }), 404),
            (ApiError::from(DomainError::InvalidCredentials), 401),
            (ApiError::from(DomainError::Unauthorized), 401),
            (ApiError::from(DomainError::Forbidden), 403),
            (ApiError::BadRequest("Invalid rental ID"), 400),
        ];

        for (err, status) in cases {
            assert_eq!(err.status_code().as_u16(), status, "{}", err);
        }
    }

    #[test]
    fn body_carries_the_display_message() {
        let err = ApiError::from(DomainError::Forbidden);
        assert_eq!(err.to_string(), "Access denied");
    }
}
