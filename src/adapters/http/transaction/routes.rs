//! Axum router configuration for transaction endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{
    create_transaction, delete_transaction, get_member_transactions, list_transactions,
    update_transaction, TransactionAppState,
};

/// Create the transaction API router.
///
/// # Routes
///
/// - `POST /` - Record a transaction
/// - `GET /` - All transactions
/// - `GET /member/:contact` - The member's transactions
/// - `PUT /:contact/:id` - Amend a transaction
/// - `DELETE /:contact/:id` - Remove a transaction
pub fn routes() -> Router<TransactionAppState> {
    Router::new()
        .route("/", get(list_transactions).post(create_transaction))
        .route("/member/:contact", get(get_member_transactions))
        .route(
            "/:contact/:id",
            put(update_transaction).delete(delete_transaction),
        )
}
