// Error types and error handling module
// This file defines the service error taxonomy and how each variant
// is surfaced over HTTP
//
// Numan Thabit 2025 Nov

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body sent with every 400 response.
pub const INVALID_NUMBER_BODY: &str = "Invalid number";

#[derive(Debug, Error)]
pub enum ServiceError {
    /// `number` missing or not a base-10 `i64`.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
    #[error("encode error: {0}")]
    Encode(String),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::Metrics(_) | ServiceError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            // plain text, fixed message; detail stays in the logs
            ServiceError::InvalidInput(_) => {
                (StatusCode::BAD_REQUEST, INVALID_NUMBER_BODY).into_response()
            }
            other => (other.status(), other.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let err = ServiceError::InvalidInput("abc".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn metrics_errors_are_server_errors() {
        let err = ServiceError::from(prometheus::Error::Msg("boom".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("boom"));
    }
}
