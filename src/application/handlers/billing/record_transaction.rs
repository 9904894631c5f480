//! RecordTransactionHandler - Command handler for recording purchases.

use std::sync::Arc;

use crate::domain::billing::{TransactionDraft, TransactionRecord};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::TransactionRepository;

/// Command to record a transaction. The draft is already validated; the
/// repository resolves the item code and the member reference.
#[derive(Debug, Clone)]
pub struct RecordTransactionCommand {
    pub draft: TransactionDraft,
}

/// Handler for recording transactions with a server-assigned timestamp.
pub struct RecordTransactionHandler {
    transactions: Arc<dyn TransactionRepository>,
}

impl RecordTransactionHandler {
    pub fn new(transactions: Arc<dyn TransactionRepository>) -> Self {
        Self { transactions }
    }

    pub async fn handle(
        &self,
        cmd: RecordTransactionCommand,
    ) -> Result<TransactionRecord, DomainError> {
        let record = self
            .transactions
            .record(&cmd.draft, Timestamp::now())
            .await?;
        tracing::debug!(
            contact = %record.contact_number,
            id = record.id,
            total = record.total_amount,
            "transaction recorded"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::{Discount, PaymentMethod, TransactionPatch};
    use crate::domain::foundation::{ContactNumber, ErrorCode, ItemCode};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockTransactionRepository {
        known_items: Vec<&'static str>,
        records: Mutex<Vec<TransactionRecord>>,
    }

    impl MockTransactionRepository {
        fn with_items(known_items: Vec<&'static str>) -> Self {
            Self {
                known_items,
                records: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TransactionRepository for MockTransactionRepository {
        async fn record(
            &self,
            draft: &TransactionDraft,
            at: Timestamp,
        ) -> Result<TransactionRecord, DomainError> {
            if !self.known_items.contains(&draft.item_code.as_str()) {
                return Err(DomainError::new(ErrorCode::ItemNotFound, "Item not found"));
            }
            let mut records = self.records.lock().unwrap();
            let record = TransactionRecord {
                id: records.len() as i64 + 1,
                contact_number: draft.contact_number.clone(),
                recorded_at: at,
                item_code: draft.item_code.clone(),
                count: draft.count,
                unit_price: draft.unit_price,
                discount: draft.discount.as_f64(),
                total_amount: draft.total_amount(),
                payment_method: draft.payment_method,
            };
            records.push(record.clone());
            Ok(record)
        }

        async fn for_member(
            &self,
            _contact: &ContactNumber,
        ) -> Result<Vec<TransactionRecord>, DomainError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn list(&self) -> Result<Vec<TransactionRecord>, DomainError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn amend(
            &self,
            _contact: &ContactNumber,
            _id: i64,
            _patch: &TransactionPatch,
        ) -> Result<TransactionRecord, DomainError> {
            unimplemented!()
        }

        async fn remove(&self, _contact: &ContactNumber, _id: i64) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn draft(item: &str, count: i64, unit_price: i64, discount: f64) -> TransactionDraft {
        TransactionDraft::new(
            ContactNumber::new("0912345678").unwrap(),
            ItemCode::new(item).unwrap(),
            count,
            unit_price,
            Discount::new(discount).unwrap(),
            PaymentMethod::Cash,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn recording_computes_total_and_assigns_time() {
        let repo = Arc::new(MockTransactionRepository::with_items(vec!["P001"]));
        let handler = RecordTransactionHandler::new(repo);
        let before = Timestamp::now();

        let record = handler
            .handle(RecordTransactionCommand {
                draft: draft("P001", 2, 500, 1.0),
            })
            .await
            .unwrap();

        assert_eq!(record.total_amount, 1000);
        assert!(!before.is_after(&record.recorded_at));
    }

    #[tokio::test]
    async fn recording_against_unknown_item_fails() {
        let repo = Arc::new(MockTransactionRepository::with_items(vec!["P001"]));
        let handler = RecordTransactionHandler::new(repo);

        let err = handler
            .handle(RecordTransactionCommand {
                draft: draft("X999", 1, 100, 1.0),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ItemNotFound);
    }

    #[tokio::test]
    async fn discounted_total_uses_retention_factor() {
        let repo = Arc::new(MockTransactionRepository::with_items(vec!["M001"]));
        let handler = RecordTransactionHandler::new(repo);

        let record = handler
            .handle(RecordTransactionCommand {
                draft: draft("M001", 1, 2000, 0.9),
            })
            .await
            .unwrap();

        assert_eq!(record.total_amount, 1800);
    }
}
