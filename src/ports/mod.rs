//! Repository ports. Implementations live in `adapters`.

mod check_in_repository;
mod member_photo_repository;
mod member_repository;
mod membership_plan_repository;
mod membership_status_repository;
mod product_repository;
mod transaction_repository;

pub use check_in_repository::CheckInRepository;
pub use member_photo_repository::MemberPhotoRepository;
pub use member_repository::MemberRepository;
pub use membership_plan_repository::MembershipPlanRepository;
pub use membership_status_repository::MembershipStatusRepository;
pub use product_repository::ProductRepository;
pub use transaction_repository::TransactionRepository;
