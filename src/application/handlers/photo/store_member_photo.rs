//! StoreMemberPhotoHandler - Command handler for photo uploads.

use std::sync::Arc;

use crate::domain::foundation::{ContactNumber, DomainError, Timestamp};
use crate::domain::member::MemberPhoto;
use crate::ports::MemberPhotoRepository;

/// Command to store a new member photo.
#[derive(Debug, Clone)]
pub struct StoreMemberPhotoCommand {
    pub contact_number: ContactNumber,
    pub image: Vec<u8>,
}

/// Handler for photo uploads. Generates the photo name from the contact
/// number and the upload time; the repository deactivates any previous
/// active photo.
pub struct StoreMemberPhotoHandler {
    photos: Arc<dyn MemberPhotoRepository>,
}

impl StoreMemberPhotoHandler {
    pub fn new(photos: Arc<dyn MemberPhotoRepository>) -> Self {
        Self { photos }
    }

    pub async fn handle(&self, cmd: StoreMemberPhotoCommand) -> Result<MemberPhoto, DomainError> {
        let photo = MemberPhoto::uploaded(cmd.contact_number, cmd.image, Timestamp::now());
        self.photos.store(&photo).await?;
        Ok(photo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockMemberPhotoRepository {
        member_known: bool,
        photos: Mutex<Vec<MemberPhoto>>,
    }

    impl MockMemberPhotoRepository {
        fn new(member_known: bool) -> Self {
            Self {
                member_known,
                photos: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl MemberPhotoRepository for MockMemberPhotoRepository {
        async fn store(&self, photo: &MemberPhoto) -> Result<(), DomainError> {
            if !self.member_known {
                return Err(DomainError::new(
                    ErrorCode::InvalidReference,
                    "Member does not exist",
                ));
            }
            let mut photos = self.photos.lock().unwrap();
            for existing in photos.iter_mut() {
                if existing.contact_number == photo.contact_number {
                    existing.is_active = false;
                }
            }
            photos.push(photo.clone());
            Ok(())
        }

        async fn find_active(
            &self,
            contact: &ContactNumber,
        ) -> Result<Option<MemberPhoto>, DomainError> {
            Ok(self
                .photos
                .lock()
                .unwrap()
                .iter()
                .find(|p| &p.contact_number == contact && p.is_active)
                .cloned())
        }

        async fn list(&self) -> Result<Vec<MemberPhoto>, DomainError> {
            Ok(self.photos.lock().unwrap().clone())
        }

        async fn replace_active(
            &self,
            _contact: &ContactNumber,
            _image: &[u8],
        ) -> Result<(), DomainError> {
            Ok(())
        }

        async fn delete_for(&self, _contact: &ContactNumber) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn contact() -> ContactNumber {
        ContactNumber::new("0912345678").unwrap()
    }

    #[tokio::test]
    async fn upload_generates_name_and_stores_active_photo() {
        let repo = Arc::new(MockMemberPhotoRepository::new(true));
        let handler = StoreMemberPhotoHandler::new(repo.clone());

        let photo = handler
            .handle(StoreMemberPhotoCommand {
                contact_number: contact(),
                image: vec![0xFF, 0xD8],
            })
            .await
            .unwrap();

        assert!(photo.is_active);
        assert!(photo.photo_name.starts_with("member_0912345678_"));

        let active = repo.find_active(&contact()).await.unwrap();
        assert_eq!(active.unwrap().photo_name, photo.photo_name);
    }

    #[tokio::test]
    async fn second_upload_deactivates_first_photo() {
        let repo = Arc::new(MockMemberPhotoRepository::new(true));
        let handler = StoreMemberPhotoHandler::new(repo.clone());

        handler
            .handle(StoreMemberPhotoCommand {
                contact_number: contact(),
                image: vec![1],
            })
            .await
            .unwrap();
        handler
            .handle(StoreMemberPhotoCommand {
                contact_number: contact(),
                image: vec![2],
            })
            .await
            .unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        let active: Vec<_> = all.iter().filter(|p| p.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].image, vec![2]);
    }

    #[tokio::test]
    async fn upload_for_unknown_member_fails() {
        let repo = Arc::new(MockMemberPhotoRepository::new(false));
        let handler = StoreMemberPhotoHandler::new(repo);

        let err = handler
            .handle(StoreMemberPhotoCommand {
                contact_number: contact(),
                image: vec![0],
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidReference);
    }
}
