//! HTTP DTOs for membership plan endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ItemCode, ValidationError};
use crate::domain::membership::{MembershipPlan, PlanPatch};

/// Request to create a membership plan.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlanRequest {
    pub item_code: String,
    pub sale_price: i64,
    pub plan_type: String,
    pub duration_months: i32,
}

impl CreatePlanRequest {
    pub fn into_plan(self) -> Result<MembershipPlan, ValidationError> {
        let item_code = ItemCode::new(self.item_code)?;
        MembershipPlan::new(item_code, self.sale_price, self.plan_type, self.duration_months)
    }
}

/// Request to update a plan; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlanRequest {
    pub sale_price: Option<i64>,
    pub plan_type: Option<String>,
    pub duration_months: Option<i32>,
}

impl UpdatePlanRequest {
    pub fn into_patch(self) -> Result<PlanPatch, ValidationError> {
        let patch = PlanPatch {
            sale_price: self.sale_price,
            plan_type: self.plan_type,
            duration_months: self.duration_months,
        };
        patch.validate()?;
        Ok(patch)
    }
}

/// Plan details for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub item_code: String,
    pub sale_price: i64,
    pub plan_type: String,
    pub duration_months: i32,
}

impl From<MembershipPlan> for PlanResponse {
    fn from(plan: MembershipPlan) -> Self {
        Self {
            item_code: plan.item_code.to_string(),
            sale_price: plan.sale_price,
            plan_type: plan.plan_type,
            duration_months: plan.duration_months,
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
