//! Membership plan HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreatePlanRequest, MessageResponse, PlanResponse, UpdatePlanRequest};
pub use handlers::PlanAppState;
pub use routes::routes;
