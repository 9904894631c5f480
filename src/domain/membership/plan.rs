//! Membership plan catalog entries.

use crate::domain::foundation::{ItemCode, ValidationError};

const PLAN_TYPE_MAX: usize = 50;

/// A purchasable membership plan, sharing the item-code namespace with
/// products (M- prefix by convention).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipPlan {
    pub item_code: ItemCode,
    pub sale_price: i64,
    pub plan_type: String,
    pub duration_months: i32,
}

impl MembershipPlan {
    pub fn new(
        item_code: ItemCode,
        sale_price: i64,
        plan_type: impl Into<String>,
        duration_months: i32,
    ) -> Result<Self, ValidationError> {
        if sale_price <= 0 {
            return Err(ValidationError::not_positive("sale_price", sale_price));
        }
        if duration_months <= 0 {
            return Err(ValidationError::not_positive(
                "duration_months",
                i64::from(duration_months),
            ));
        }
        let plan_type = plan_type.into();
        if plan_type.trim().is_empty() {
            return Err(ValidationError::empty_field("plan_type"));
        }
        if plan_type.len() > PLAN_TYPE_MAX {
            return Err(ValidationError::too_long("plan_type", PLAN_TYPE_MAX));
        }
        Ok(Self {
            item_code,
            sale_price,
            plan_type,
            duration_months,
        })
    }
}

/// Partial update for membership plans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanPatch {
    pub sale_price: Option<i64>,
    pub plan_type: Option<String>,
    pub duration_months: Option<i32>,
}

impl PlanPatch {
    pub fn is_empty(&self) -> bool {
        self.sale_price.is_none() && self.plan_type.is_none() && self.duration_months.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(price) = self.sale_price {
            if price <= 0 {
                return Err(ValidationError::not_positive("sale_price", price));
            }
        }
        if let Some(duration) = self.duration_months {
            if duration <= 0 {
                return Err(ValidationError::not_positive(
                    "duration_months",
                    i64::from(duration),
                ));
            }
        }
        if let Some(plan_type) = &self.plan_type {
            if plan_type.trim().is_empty() {
                return Err(ValidationError::empty_field("plan_type"));
            }
            if plan_type.len() > PLAN_TYPE_MAX {
                return Err(ValidationError::too_long("plan_type", PLAN_TYPE_MAX));
            }
        }
        Ok(())
    }
}
