//! Check-in HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{CheckInRequest, CheckInResponse, MessageResponse};
pub use handlers::CheckInAppState;
pub use routes::routes;
