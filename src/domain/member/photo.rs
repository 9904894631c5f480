//! Member photo entity.

use crate::domain::foundation::{ContactNumber, Timestamp};

/// A stored member photo. At most one photo per member is active; uploading
/// a new one deactivates the previous active photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPhoto {
    pub photo_name: String,
    pub image: Vec<u8>,
    pub contact_number: ContactNumber,
    pub is_active: bool,
}

impl MemberPhoto {
    /// Builds a fresh active photo with a server-generated name.
    pub fn uploaded(contact_number: ContactNumber, image: Vec<u8>, at: Timestamp) -> Self {
        let photo_name = photo_name_for(&contact_number, at);
        Self {
            photo_name,
            image,
            contact_number,
            is_active: true,
        }
    }
}

/// Generated photo name: `member_{contact}_{yyyymmddHHMMSS}.jpg`.
pub fn photo_name_for(contact_number: &ContactNumber, at: Timestamp) -> String {
    format!("member_{}_{}.jpg", contact_number, at.compact())
}
