//! HTTP DTOs for member endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ContactNumber, ValidationError};
use crate::domain::member::{Member, MemberPatch};

/// Request to register a member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMemberRequest {
    pub contact_number: String,
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub emergency_name: String,
    pub emergency_number: String,
    /// Opening balance; defaults to 0.
    #[serde(default)]
    pub balance: Option<i64>,
    /// Opening reward points; defaults to 100.
    #[serde(default)]
    pub reward_points: Option<i64>,
}

impl CreateMemberRequest {
    /// Converts to the domain entity, running the single validation pass.
    pub fn into_member(self, created_on: NaiveDate) -> Result<Member, ValidationError> {
        let contact_number = ContactNumber::new(self.contact_number)?;
        Member::register(
            contact_number,
            self.name,
            self.email,
            self.date_of_birth,
            self.emergency_name,
            self.emergency_number,
            self.balance,
            self.reward_points,
            created_on,
        )
    }
}

/// Request to update a member; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub emergency_name: Option<String>,
    pub emergency_number: Option<String>,
    pub balance: Option<i64>,
    pub reward_points: Option<i64>,
}

impl UpdateMemberRequest {
    pub fn into_patch(self) -> Result<MemberPatch, ValidationError> {
        let patch = MemberPatch {
            name: self.name,
            email: self.email,
            date_of_birth: self.date_of_birth,
            emergency_name: self.emergency_name,
            emergency_number: self.emergency_number,
            balance: self.balance,
            reward_points: self.reward_points,
        };
        patch.validate()?;
        Ok(patch)
    }
}

/// Member details for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub contact_number: String,
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub emergency_name: String,
    pub emergency_number: String,
    pub balance: i64,
    pub reward_points: i64,
    pub created_on: NaiveDate,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            contact_number: member.contact_number.to_string(),
            name: member.name,
            email: member.email,
            date_of_birth: member.date_of_birth,
            emergency_name: member.emergency_name,
            emergency_number: member.emergency_number,
            balance: member.balance,
            reward_points: member.reward_points,
            created_on: member.created_on,
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
