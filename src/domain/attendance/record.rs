//! Attendance record entity.

use crate::domain::foundation::{ContactNumber, Timestamp};

/// One gym visit. A record is open until a check-out timestamp is set;
/// at most one open record exists per member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInRecord {
    pub id: i64,
    pub contact_number: ContactNumber,
    pub check_in_at: Timestamp,
    pub check_out_at: Option<Timestamp>,
}

impl CheckInRecord {
    /// True while the member has not checked out.
    pub fn is_open(&self) -> bool {
        self.check_out_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactNumber {
        ContactNumber::new("0912345678").unwrap()
    }

    #[test]
    fn record_without_check_out_is_open() {
        let record = CheckInRecord {
            id: 1,
            contact_number: contact(),
            check_in_at: Timestamp::now(),
            check_out_at: None,
        };
        assert!(record.is_open());
    }

    #[test]
    fn record_with_check_out_is_closed() {
        let check_in = Timestamp::now();
        let record = CheckInRecord {
            id: 1,
            contact_number: contact(),
            check_in_at: check_in,
            check_out_at: Some(check_in.plus_secs(3600)),
        };
        assert!(!record.is_open());
        assert!(record.check_out_at.unwrap().is_after(&record.check_in_at));
    }
}
