//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Inserts and updates take
//! a fully-built domain entity, so normalization happens once in
//! `hiretrack_core` regardless of which store is active.

pub mod attrition_repo;
pub mod bottleneck_repo;
pub mod candidate_repo;
pub mod headcount_repo;
pub mod interview_repo;
pub mod offer_repo;
pub mod role_repo;
pub mod ta_owner_repo;

pub use attrition_repo::AttritionRepo;
pub use bottleneck_repo::BottleneckRepo;
pub use candidate_repo::CandidateRepo;
pub use headcount_repo::HeadcountRepo;
pub use interview_repo::InterviewRepo;
pub use offer_repo::OfferRepo;
pub use role_repo::RoleRepo;
pub use ta_owner_repo::TaOwnerRepo;
