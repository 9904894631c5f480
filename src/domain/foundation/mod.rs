//! Shared domain vocabulary: identifiers, timestamps, and error types.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ContactNumber, ItemCode};
pub use timestamp::Timestamp;
