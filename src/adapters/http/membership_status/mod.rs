//! Membership status HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateStatusRequest, MessageResponse, StatusResponse, UpdateStatusRequest};
pub use handlers::StatusAppState;
pub use routes::routes;
