//! Membership status records.

use chrono::NaiveDate;

use crate::domain::foundation::{ContactNumber, ValidationError};

/// Validated start/end pair for a membership period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPeriod {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl StatusPeriod {
    /// Creates a period; the end date must strictly exceed the start date.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, ValidationError> {
        if end_date <= start_date {
            return Err(ValidationError::InvalidPeriod);
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }
}

/// A membership status row. At most one active status exists per member,
/// enforced at creation time only (a concurrent update can still violate
/// it; known limitation carried over from the storage contract).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipStatus {
    pub id: i64,
    pub contact_number: ContactNumber,
    pub period: StatusPeriod,
    pub is_active: bool,
}

/// Partial update for membership statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusPatch {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

impl StatusPatch {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.is_active.is_none()
    }

    /// Cross-field date ordering can only be checked here when both dates
    /// are supplied; a single-sided change is left to the storage CHECK.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end <= start {
                return Err(ValidationError::InvalidPeriod);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn period_accepts_ordered_dates() {
        let period = StatusPeriod::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        assert_eq!(period.start_date(), date(2024, 1, 1));
        assert_eq!(period.end_date(), date(2024, 12, 31));
    }

    #[test]
    fn period_rejects_end_not_after_start() {
        assert!(StatusPeriod::new(date(2024, 1, 1), date(2024, 1, 1)).is_err());
        assert!(StatusPeriod::new(date(2024, 6, 1), date(2024, 1, 1)).is_err());
    }

    #[test]
    fn patch_rejects_inverted_date_pair() {
        let patch = StatusPatch {
            start_date: Some(date(2024, 6, 1)),
            end_date: Some(date(2024, 1, 1)),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn patch_allows_single_sided_date_change() {
        let patch = StatusPatch {
            end_date: Some(date(2025, 1, 1)),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());
        assert!(!patch.is_empty());
    }

    #[test]
    fn empty_patch_reports_empty() {
        assert!(StatusPatch::default().is_empty());
    }
}
