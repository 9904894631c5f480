//! Payment methods and the discount factor.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// How a transaction was paid. Paying with reward points records the
/// method only; point and balance mutation is intentionally out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    ETransfer,
    RewardPoints,
}

impl PaymentMethod {
    /// Parses the wire/storage representation.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "credit_card" => Ok(PaymentMethod::CreditCard),
            "e_transfer" => Ok(PaymentMethod::ETransfer),
            "reward_points" => Ok(PaymentMethod::RewardPoints),
            other => Err(ValidationError::invalid_format(
                "payment_method",
                format!("unknown payment method '{}'", other),
            )),
        }
    }

    /// Storage representation, matching the schema CHECK constraint.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::ETransfer => "e_transfer",
            PaymentMethod::RewardPoints => "reward_points",
        }
    }
}

/// Multiplicative price retention factor: 1.0 is full price, 0.5 is half
/// price. This inverts the everyday "percent off" convention and is kept
/// that way deliberately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discount(f64);

impl Discount {
    /// Creates a discount; the factor must satisfy `0 < d <= 1`.
    pub fn new(factor: f64) -> Result<Self, ValidationError> {
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(ValidationError::InvalidDiscount { actual: factor });
        }
        Ok(Self(factor))
    }

    /// Full price (no discount).
    pub fn full() -> Self {
        Self(1.0)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl Default for Discount {
    fn default() -> Self {
        Self::full()
    }
}
