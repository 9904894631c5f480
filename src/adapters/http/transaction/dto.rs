//! HTTP DTOs for transaction endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::billing::{
    Discount, PaymentMethod, TransactionDraft, TransactionPatch, TransactionRecord,
};
use crate::domain::foundation::{ContactNumber, ItemCode, Timestamp, ValidationError};

/// Request to record a transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransactionRequest {
    pub contact_number: String,
    pub item_code: String,
    pub count: i64,
    pub unit_price: i64,
    /// Retention factor, 1.0 = full price. Defaults to 1.0.
    #[serde(default)]
    pub discount: Option<f64>,
    pub payment_method: PaymentMethod,
}

impl CreateTransactionRequest {
    pub fn into_draft(self) -> Result<TransactionDraft, ValidationError> {
        let contact_number = ContactNumber::new(self.contact_number)?;
        let item_code = ItemCode::new(self.item_code)?;
        let discount = match self.discount {
            Some(factor) => Discount::new(factor)?,
            None => Discount::full(),
        };
        TransactionDraft::new(
            contact_number,
            item_code,
            self.count,
            self.unit_price,
            discount,
            self.payment_method,
        )
    }
}

/// Request to amend a transaction; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTransactionRequest {
    pub item_code: Option<String>,
    pub count: Option<i64>,
    pub unit_price: Option<i64>,
    pub discount: Option<f64>,
    pub payment_method: Option<PaymentMethod>,
}

impl UpdateTransactionRequest {
    pub fn into_patch(self) -> Result<TransactionPatch, ValidationError> {
        let item_code = self.item_code.map(ItemCode::new).transpose()?;
        let discount = self.discount.map(Discount::new).transpose()?;
        let patch = TransactionPatch {
            item_code,
            count: self.count,
            unit_price: self.unit_price,
            discount,
            payment_method: self.payment_method,
        };
        patch.validate()?;
        Ok(patch)
    }
}

/// Transaction details for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionResponse {
    pub id: i64,
    pub contact_number: String,
    pub recorded_at: Timestamp,
    pub item_code: String,
    pub count: i64,
    pub unit_price: i64,
    pub discount: f64,
    pub total_amount: i64,
    pub payment_method: PaymentMethod,
}

impl From<TransactionRecord> for TransactionResponse {
    fn from(record: TransactionRecord) -> Self {
        Self {
            id: record.id,
            contact_number: record.contact_number.to_string(),
            recorded_at: record.recorded_at,
            item_code: record.item_code.to_string(),
            count: record.count,
            unit_price: record.unit_price,
            discount: record.discount,
            total_amount: record.total_amount,
            payment_method: record.payment_method,
        }
    }
}

/// Result message for update/delete operations.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
