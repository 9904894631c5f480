//! Member photo HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{MessageResponse, PhotoResponse};
pub use handlers::PhotoAppState;
pub use routes::routes;
