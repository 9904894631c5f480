//! Billing command handlers.

mod record_transaction;

pub use record_transaction::{RecordTransactionCommand, RecordTransactionHandler};
