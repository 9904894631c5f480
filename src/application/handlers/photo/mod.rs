//! Photo command handlers.

mod store_member_photo;

pub use store_member_photo::{StoreMemberPhotoCommand, StoreMemberPhotoHandler};
