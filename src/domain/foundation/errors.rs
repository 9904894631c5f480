//! Error types for the domain layer.

use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' exceeds maximum length of {max}")]
    TooLong { field: String, max: usize },

    #[error("Field '{field}' must be positive, got {actual}")]
    NotPositive { field: String, actual: i64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("End date must exceed start date")]
    InvalidPeriod,

    #[error("Discount must be greater than 0 and at most 1, got {actual}")]
    InvalidDiscount { actual: f64 },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a too-long validation error.
    pub fn too_long(field: impl Into<String>, max: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
        }
    }

    /// Creates a not-positive validation error.
    pub fn not_positive(field: impl Into<String>, actual: i64) -> Self {
        ValidationError::NotPositive {
            field: field.into(),
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    // A write referenced a row that does not exist (member, item code).
    InvalidReference,
    ItemNotFound,

    // Uniqueness / business-rule conflicts
    MemberExists,
    ActiveStatusExists,
    OpenCheckInExists,
    ProductExists,
    PlanExists,

    // Not found errors
    MemberNotFound,
    StatusNotFound,
    CheckInNotFound,
    ProductNotFound,
    PlanNotFound,
    TransactionNotFound,
    PhotoNotFound,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidReference => "INVALID_REFERENCE",
            ErrorCode::ItemNotFound => "ITEM_NOT_FOUND",
            ErrorCode::MemberExists => "MEMBER_EXISTS",
            ErrorCode::ActiveStatusExists => "ACTIVE_STATUS_EXISTS",
            ErrorCode::OpenCheckInExists => "OPEN_CHECK_IN_EXISTS",
            ErrorCode::ProductExists => "PRODUCT_EXISTS",
            ErrorCode::PlanExists => "PLAN_EXISTS",
            ErrorCode::MemberNotFound => "MEMBER_NOT_FOUND",
            ErrorCode::StatusNotFound => "STATUS_NOT_FOUND",
            ErrorCode::CheckInNotFound => "CHECK_IN_NOT_FOUND",
            ErrorCode::ProductNotFound => "PRODUCT_NOT_FOUND",
            ErrorCode::PlanNotFound => "PLAN_NOT_FOUND",
            ErrorCode::TransactionNotFound => "TRANSACTION_NOT_FOUND",
            ErrorCode::PhotoNotFound => "PHOTO_NOT_FOUND",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code and message.
///
/// Repositories never bubble raw storage errors; every failure is folded
/// into one of these and interpreted by the HTTP layer.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// True when the code is one of the not-found variants.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::MemberNotFound
                | ErrorCode::StatusNotFound
                | ErrorCode::CheckInNotFound
                | ErrorCode::ProductNotFound
                | ErrorCode::PlanNotFound
                | ErrorCode::TransactionNotFound
                | ErrorCode::PhotoNotFound
        )
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(ErrorCode::ValidationFailed, err.to_string())
    }
}
