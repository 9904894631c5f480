//! Shared HTTP error mapping.
//!
//! Every failure below the HTTP layer is a `DomainError`; this module owns
//! the single mapping from error codes to HTTP statuses. Business-rule
//! conflicts (duplicates, open records, active statuses) surface as 400,
//! missing resources as 404, storage failures as 500. Malformed request
//! bodies never reach here; axum's extractors reject them with 422.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Standard error response body for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(DomainError::from(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0.code {
            ErrorCode::MemberNotFound
            | ErrorCode::StatusNotFound
            | ErrorCode::CheckInNotFound
            | ErrorCode::ProductNotFound
            | ErrorCode::PlanNotFound
            | ErrorCode::TransactionNotFound
            | ErrorCode::PhotoNotFound => StatusCode::NOT_FOUND,

            ErrorCode::ValidationFailed
            | ErrorCode::InvalidReference
            | ErrorCode::ItemNotFound
            | ErrorCode::MemberExists
            | ErrorCode::ActiveStatusExists
            | ErrorCode::OpenCheckInExists
            | ErrorCode::ProductExists
            | ErrorCode::PlanExists => StatusCode::BAD_REQUEST,

            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "request failed");
        }

        let body = ErrorResponse::new(self.0.code.to_string(), self.0.message);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_for(code: ErrorCode) -> StatusCode {
        ApiError(DomainError::new(code, "test"))
            .into_response()
            .status()
    }

    #[test]
    fn not_found_codes_map_to_404() {
        assert_eq!(status_for(ErrorCode::MemberNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::StatusNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::CheckInNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::ProductNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::PlanNotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(ErrorCode::TransactionNotFound),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_for(ErrorCode::PhotoNotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn business_rule_conflicts_map_to_400() {
        assert_eq!(status_for(ErrorCode::MemberExists), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(ErrorCode::ActiveStatusExists),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(ErrorCode::OpenCheckInExists),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_for(ErrorCode::ItemNotFound), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(ErrorCode::InvalidReference),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(ErrorCode::ValidationFailed),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn infrastructure_errors_map_to_500() {
        assert_eq!(
            status_for(ErrorCode::DatabaseError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(ErrorCode::InternalError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_error_converts_to_400() {
        let err: ApiError = ValidationError::empty_field("name").into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
