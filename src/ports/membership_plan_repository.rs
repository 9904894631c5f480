//! Membership plan repository port.

use crate::domain::foundation::{DomainError, ItemCode};
use crate::domain::membership::{MembershipPlan, PlanPatch};
use async_trait::async_trait;

/// Repository port for the membership plan catalog. Mirrors the product
/// repository; plans share the item-code namespace with products.
#[async_trait]
pub trait MembershipPlanRepository: Send + Sync {
    /// Insert a new plan.
    ///
    /// # Errors
    ///
    /// - `PlanExists` if the item code is taken
    async fn create(&self, plan: &MembershipPlan) -> Result<(), DomainError>;

    /// Find a plan by item code.
    async fn find(&self, code: &ItemCode) -> Result<Option<MembershipPlan>, DomainError>;

    /// List all plans.
    async fn list(&self) -> Result<Vec<MembershipPlan>, DomainError>;

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// - `PlanNotFound` if no row matched
    async fn update(&self, code: &ItemCode, patch: &PlanPatch) -> Result<(), DomainError>;

    /// Delete a plan.
    ///
    /// # Errors
    ///
    /// - `PlanNotFound` if no row matched
    async fn delete(&self, code: &ItemCode) -> Result<(), DomainError>;
}
