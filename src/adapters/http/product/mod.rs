//! Product HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateProductRequest, MessageResponse, ProductResponse, UpdateProductRequest};
pub use handlers::ProductAppState;
pub use routes::routes;
