//! Member entity and partial-update patch.

use chrono::NaiveDate;

use crate::domain::foundation::{ContactNumber, ValidationError};

const NAME_MAX: usize = 50;
const EMAIL_MAX: usize = 100;
const EMERGENCY_NAME_MAX: usize = 25;
const EMERGENCY_NUMBER_MAX: usize = 20;

/// A gym member, keyed by contact number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub contact_number: ContactNumber,
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub emergency_name: String,
    pub emergency_number: String,
    pub balance: i64,
    pub reward_points: i64,
    pub created_on: NaiveDate,
}

impl Member {
    /// Reward points granted to every new member.
    pub const DEFAULT_REWARD_POINTS: i64 = 100;

    /// Builds a member record for registration.
    ///
    /// Balance defaults to 0 and reward points to 100 when not supplied.
    #[allow(clippy::too_many_arguments)]
    pub fn register(
        contact_number: ContactNumber,
        name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
        emergency_name: impl Into<String>,
        emergency_number: impl Into<String>,
        balance: Option<i64>,
        reward_points: Option<i64>,
        created_on: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let name = required_text("name", name.into(), NAME_MAX)?;
        let email = required_text("email", email.into(), EMAIL_MAX)?;
        let emergency_name =
            required_text("emergency_name", emergency_name.into(), EMERGENCY_NAME_MAX)?;
        let emergency_number = required_text(
            "emergency_number",
            emergency_number.into(),
            EMERGENCY_NUMBER_MAX,
        )?;

        let balance = balance.unwrap_or(0);
        if balance < 0 {
            return Err(ValidationError::not_positive("balance", balance));
        }
        let reward_points = reward_points.unwrap_or(Self::DEFAULT_REWARD_POINTS);
        if reward_points < 0 {
            return Err(ValidationError::not_positive("reward_points", reward_points));
        }

        Ok(Self {
            contact_number,
            name,
            email,
            date_of_birth,
            emergency_name,
            emergency_number,
            balance,
            reward_points,
            created_on,
        })
    }
}

/// Partial update for a member; only supplied fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub emergency_name: Option<String>,
    pub emergency_number: Option<String>,
    pub balance: Option<i64>,
    pub reward_points: Option<i64>,
}

impl MemberPatch {
    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.date_of_birth.is_none()
            && self.emergency_name.is_none()
            && self.emergency_number.is_none()
            && self.balance.is_none()
            && self.reward_points.is_none()
    }

    /// Checks every supplied field against the same rules registration uses.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            required_text("name", name.clone(), NAME_MAX)?;
        }
        if let Some(email) = &self.email {
            required_text("email", email.clone(), EMAIL_MAX)?;
        }
        if let Some(emergency_name) = &self.emergency_name {
            required_text("emergency_name", emergency_name.clone(), EMERGENCY_NAME_MAX)?;
        }
        if let Some(emergency_number) = &self.emergency_number {
            required_text(
                "emergency_number",
                emergency_number.clone(),
                EMERGENCY_NUMBER_MAX,
            )?;
        }
        if let Some(balance) = self.balance {
            if balance < 0 {
                return Err(ValidationError::not_positive("balance", balance));
            }
        }
        if let Some(points) = self.reward_points {
            if points < 0 {
                return Err(ValidationError::not_positive("reward_points", points));
            }
        }
        Ok(())
    }
}

fn required_text(field: &str, value: String, max: usize) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    if value.len() > max {
        return Err(ValidationError::too_long(field, max));
    }
    Ok(value)
}
