//! Transaction HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateTransactionRequest, MessageResponse, TransactionResponse, UpdateTransactionRequest,
};
pub use handlers::TransactionAppState;
pub use routes::routes;
