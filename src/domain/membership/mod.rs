//! Membership plans and per-member membership statuses.

mod plan;
mod status;

pub use plan::{MembershipPlan, PlanPatch};
pub use status::{MembershipStatus, StatusPatch, StatusPeriod};
