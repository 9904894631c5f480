//! Member records and member photos.

mod member;
mod photo;

pub use member::{Member, MemberPatch};
pub use photo::{photo_name_for, MemberPhoto};
