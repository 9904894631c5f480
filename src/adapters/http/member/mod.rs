//! Member HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateMemberRequest, MemberResponse, MessageResponse, UpdateMemberRequest};
pub use handlers::MemberAppState;
pub use routes::routes;
