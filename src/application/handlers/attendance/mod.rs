//! Attendance command handlers.

mod check_in_member;
mod check_out_member;

pub use check_in_member::{CheckInMemberCommand, CheckInMemberHandler};
pub use check_out_member::{CheckOutMemberCommand, CheckOutMemberHandler};
