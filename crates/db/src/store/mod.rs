//! Recruitment store strategy.
//!
//! Handlers talk to a [`RecruitmentStore`] trait object chosen once at
//! startup by [`connect`]: [`PgStore`] when PostgreSQL is configured and
//! reachable, otherwise [`LocalStore`] seeded with the demo dataset.

mod error;
mod local;
mod pg;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use hiretrack_core::attrition::{Attrition, CreateAttrition, UpdateAttrition};
use hiretrack_core::bottleneck::{Bottleneck, CreateBottleneck, UpdateBottleneck};
use hiretrack_core::candidate::{Candidate, CreateCandidate, UpdateCandidate};
use hiretrack_core::headcount::{CreateHeadcount, HeadcountRecord, UpdateHeadcount};
use hiretrack_core::interview::{CreateInterview, Interview, UpdateInterview};
use hiretrack_core::offer::{CreateOffer, Offer, UpdateOffer};
use hiretrack_core::role::{CreateRole, Role, UpdateRole};
use hiretrack_core::types::DbId;

pub use error::{StoreError, StoreResult};
pub use local::LocalStore;
pub use pg::PgStore;

/// Banner shown while serving the demo dataset.
pub const DEMO_DATA_NOTICE: &str =
    "Using demo data. Connect a database to save changes permanently.";

/// Which backend a store writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreMode {
    Remote,
    Local,
}

/// List/create/update/delete for every recruitment entity.
///
/// `update` applies only the `Some` fields of the DTO. Updates and deletes
/// of a missing id fail with `CoreError::NotFound`. Inputs are expected to
/// have passed field validation already.
#[async_trait]
pub trait RecruitmentStore: Send + Sync {
    fn mode(&self) -> StoreMode;

    /// Informational banner for the UI, if any.
    fn notice(&self) -> Option<String>;

    // -- Candidates --
    async fn list_candidates(&self) -> StoreResult<Vec<Candidate>>;
    async fn create_candidate(&self, input: &CreateCandidate) -> StoreResult<Candidate>;
    async fn update_candidate(&self, id: DbId, input: &UpdateCandidate) -> StoreResult<Candidate>;
    async fn set_candidate_rating(&self, id: DbId, rating: Option<u8>) -> StoreResult<Candidate>;
    async fn delete_candidate(&self, id: DbId) -> StoreResult<()>;

    // -- Roles --
    async fn list_roles(&self) -> StoreResult<Vec<Role>>;
    async fn create_role(&self, input: &CreateRole) -> StoreResult<Role>;
    async fn update_role(&self, id: DbId, input: &UpdateRole) -> StoreResult<Role>;
    async fn delete_role(&self, id: DbId) -> StoreResult<()>;

    // -- Interviews --
    async fn list_interviews(&self) -> StoreResult<Vec<Interview>>;
    async fn create_interview(&self, input: &CreateInterview) -> StoreResult<Interview>;
    async fn update_interview(&self, id: DbId, input: &UpdateInterview) -> StoreResult<Interview>;
    async fn delete_interview(&self, id: DbId) -> StoreResult<()>;

    // -- Bottlenecks --
    async fn list_bottlenecks(&self) -> StoreResult<Vec<Bottleneck>>;
    async fn create_bottleneck(&self, input: &CreateBottleneck) -> StoreResult<Bottleneck>;
    async fn update_bottleneck(
        &self,
        id: DbId,
        input: &UpdateBottleneck,
    ) -> StoreResult<Bottleneck>;
    async fn delete_bottleneck(&self, id: DbId) -> StoreResult<()>;

    // -- TA owners --
    async fn list_ta_owners(&self) -> StoreResult<Vec<String>>;
    /// Replace the whole owner list. `owners` must already be normalized.
    async fn replace_ta_owners(&self, owners: &[String]) -> StoreResult<Vec<String>>;

    // -- Offers --
    async fn list_offers(&self) -> StoreResult<Vec<Offer>>;
    async fn create_offer(&self, input: &CreateOffer) -> StoreResult<Offer>;
    async fn update_offer(&self, id: DbId, input: &UpdateOffer) -> StoreResult<Offer>;
    async fn delete_offer(&self, id: DbId) -> StoreResult<()>;

    // -- Attrition --
    async fn list_attrition(&self) -> StoreResult<Vec<Attrition>>;
    async fn create_attrition(&self, input: &CreateAttrition) -> StoreResult<Attrition>;
    async fn update_attrition(&self, id: DbId, input: &UpdateAttrition) -> StoreResult<Attrition>;
    async fn delete_attrition(&self, id: DbId) -> StoreResult<()>;

    // -- Headcount --
    /// Records in the order the chart should treat as authoritative.
    async fn list_headcount(&self) -> StoreResult<Vec<HeadcountRecord>>;
    async fn create_headcount(&self, input: &CreateHeadcount) -> StoreResult<HeadcountRecord>;
    async fn update_headcount(
        &self,
        id: DbId,
        input: &UpdateHeadcount,
    ) -> StoreResult<HeadcountRecord>;
    async fn delete_headcount(&self, id: DbId) -> StoreResult<()>;
}

/// Pick the store for this process.
///
/// Tries PostgreSQL when `database_url` is set: connect, health check and
/// migrate. Any failure, or no URL at all, falls back to the local store
/// with the demo dataset. Never fails.
pub async fn connect(database_url: Option<&str>) -> Arc<dyn RecruitmentStore> {
    let Some(url) = database_url.filter(|u| !u.trim().is_empty()) else {
        tracing::warn!("DATABASE_URL not set, serving demo data");
        return Arc::new(LocalStore::with_sample_data());
    };

    match PgStore::connect(url).await {
        Ok(store) => {
            tracing::info!("Connected to PostgreSQL, migrations applied");
            Arc::new(store)
        }
        Err(err) => {
            tracing::error!(error = %err, "Database unavailable, serving demo data");
            Arc::new(LocalStore::with_sample_data())
        }
    }
}
