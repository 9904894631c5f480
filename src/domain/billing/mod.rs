//! Transaction accounting: payment methods, discounts, totals.

mod payment;
mod transaction;

pub use payment::{Discount, PaymentMethod};
pub use transaction::{total_amount, TransactionDraft, TransactionPatch, TransactionRecord};
