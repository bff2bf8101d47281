use async_trait::async_trait;
use tokio::sync::RwLock;

use hiretrack_core::attrition::{Attrition, CreateAttrition, UpdateAttrition};
use hiretrack_core::bottleneck::{Bottleneck, CreateBottleneck, UpdateBottleneck};
use hiretrack_core::candidate::{Candidate, CreateCandidate, UpdateCandidate};
use hiretrack_core::error::CoreError;
use hiretrack_core::headcount::{CreateHeadcount, HeadcountRecord, UpdateHeadcount};
use hiretrack_core::interview::{CreateInterview, Interview, UpdateInterview};
use hiretrack_core::offer::{CreateOffer, Offer, UpdateOffer};
use hiretrack_core::role::{CreateRole, Role, UpdateRole};
use hiretrack_core::sample_data;
use hiretrack_core::ta_owner::default_owners;
use hiretrack_core::types::{DbId, Entity};

use super::{RecruitmentStore, StoreMode, StoreResult, DEMO_DATA_NOTICE};

/// One in-memory table.
struct Collection<E: Entity> {
    items: RwLock<Vec<E>>,
}

impl<E: Entity> Collection<E> {
    fn new(items: Vec<E>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    async fn list(&self) -> Vec<E> {
        self.items.read().await.clone()
    }

    async fn create(&self, input: &E::Create) -> E {
        let item = E::from_create(DbId::new_v4(), input);
        self.items.write().await.push(item.clone());
        tracing::debug!(entity = E::NAME, id = %item.id(), "Created local record");
        item
    }

    /// Run `patch` on the record with `id` and return the result.
    async fn modify(&self, id: DbId, patch: impl FnOnce(&mut E)) -> StoreResult<E> {
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(CoreError::NotFound {
                entity: E::NAME,
                id,
            })?;
        patch(item);
        Ok(item.clone())
    }

    async fn update(&self, id: DbId, input: &E::Update) -> StoreResult<E> {
        self.modify(id, |item| item.apply_update(input)).await
    }

    async fn delete(&self, id: DbId) -> StoreResult<()> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Err(CoreError::NotFound {
                entity: E::NAME,
                id,
            }
            .into());
        }
        Ok(())
    }
}

/// In-memory store used when PostgreSQL is not available.
///
/// New records get random ids and are appended. Nothing survives a
/// restart.
pub struct LocalStore {
    candidates: Collection<Candidate>,
    roles: Collection<Role>,
    interviews: Collection<Interview>,
    bottlenecks: Collection<Bottleneck>,
    offers: Collection<Offer>,
    attrition: Collection<Attrition>,
    headcount: Collection<HeadcountRecord>,
    ta_owners: RwLock<Vec<String>>,
    notice: Option<String>,
}

impl LocalStore {
    /// Empty store with the default TA owners and no notice.
    pub fn new() -> Self {
        Self {
            candidates: Collection::new(Vec::new()),
            roles: Collection::new(Vec::new()),
            interviews: Collection::new(Vec::new()),
            bottlenecks: Collection::new(Vec::new()),
            offers: Collection::new(Vec::new()),
            attrition: Collection::new(Vec::new()),
            headcount: Collection::new(Vec::new()),
            ta_owners: RwLock::new(default_owners()),
            notice: None,
        }
    }

    /// Store seeded with the demo dataset, flagged with [`DEMO_DATA_NOTICE`].
    pub fn with_sample_data() -> Self {
        Self {
            candidates: Collection::new(sample_data::candidates()),
            roles: Collection::new(sample_data::roles()),
            interviews: Collection::new(sample_data::interviews()),
            bottlenecks: Collection::new(sample_data::bottlenecks()),
            notice: Some(DEMO_DATA_NOTICE.to_string()),
            ..Self::new()
        }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecruitmentStore for LocalStore {
    fn mode(&self) -> StoreMode {
        StoreMode::Local
    }

    fn notice(&self) -> Option<String> {
        self.notice.clone()
    }

    async fn list_candidates(&self) -> StoreResult<Vec<Candidate>> {
        Ok(self.candidates.list().await)
    }

    async fn create_candidate(&self, input: &CreateCandidate) -> StoreResult<Candidate> {
        Ok(self.candidates.create(input).await)
    }

    async fn update_candidate(&self, id: DbId, input: &UpdateCandidate) -> StoreResult<Candidate> {
        self.candidates.update(id, input).await
    }

    async fn set_candidate_rating(&self, id: DbId, rating: Option<u8>) -> StoreResult<Candidate> {
        self.candidates.modify(id, |c| c.rating = rating).await
    }

    async fn delete_candidate(&self, id: DbId) -> StoreResult<()> {
        self.candidates.delete(id).await
    }

    async fn list_roles(&self) -> StoreResult<Vec<Role>> {
        Ok(self.roles.list().await)
    }

    async fn create_role(&self, input: &CreateRole) -> StoreResult<Role> {
        Ok(self.roles.create(input).await)
    }

    async fn update_role(&self, id: DbId, input: &UpdateRole) -> StoreResult<Role> {
        self.roles.update(id, input).await
    }

    async fn delete_role(&self, id: DbId) -> StoreResult<()> {
        self.roles.delete(id).await
    }

    async fn list_interviews(&self) -> StoreResult<Vec<Interview>> {
        Ok(self.interviews.list().await)
    }

    async fn create_interview(&self, input: &CreateInterview) -> StoreResult<Interview> {
        Ok(self.interviews.create(input).await)
    }

    async fn update_interview(&self, id: DbId, input: &UpdateInterview) -> StoreResult<Interview> {
        self.interviews.update(id, input).await
    }

    async fn delete_interview(&self, id: DbId) -> StoreResult<()> {
        self.interviews.delete(id).await
    }

    async fn list_bottlenecks(&self) -> StoreResult<Vec<Bottleneck>> {
        Ok(self.bottlenecks.list().await)
    }

    async fn create_bottleneck(&self, input: &CreateBottleneck) -> StoreResult<Bottleneck> {
        Ok(self.bottlenecks.create(input).await)
    }

    async fn update_bottleneck(
        &self,
        id: DbId,
        input: &UpdateBottleneck,
    ) -> StoreResult<Bottleneck> {
        self.bottlenecks.update(id, input).await
    }

    async fn delete_bottleneck(&self, id: DbId) -> StoreResult<()> {
        self.bottlenecks.delete(id).await
    }

    async fn list_ta_owners(&self) -> StoreResult<Vec<String>> {
        Ok(self.ta_owners.read().await.clone())
    }

    async fn replace_ta_owners(&self, owners: &[String]) -> StoreResult<Vec<String>> {
        let mut current = self.ta_owners.write().await;
        *current = owners.to_vec();
        Ok(current.clone())
    }

    async fn list_offers(&self) -> StoreResult<Vec<Offer>> {
        Ok(self.offers.list().await)
    }

    async fn create_offer(&self, input: &CreateOffer) -> StoreResult<Offer> {
        Ok(self.offers.create(input).await)
    }

    async fn update_offer(&self, id: DbId, input: &UpdateOffer) -> StoreResult<Offer> {
        self.offers.update(id, input).await
    }

    async fn delete_offer(&self, id: DbId) -> StoreResult<()> {
        self.offers.delete(id).await
    }

    async fn list_attrition(&self) -> StoreResult<Vec<Attrition>> {
        Ok(self.attrition.list().await)
    }

    async fn create_attrition(&self, input: &CreateAttrition) -> StoreResult<Attrition> {
        Ok(self.attrition.create(input).await)
    }

    async fn update_attrition(&self, id: DbId, input: &UpdateAttrition) -> StoreResult<Attrition> {
        self.attrition.update(id, input).await
    }

    async fn delete_attrition(&self, id: DbId) -> StoreResult<()> {
        self.attrition.delete(id).await
    }

    // Ordered by month label like the PostgreSQL listing; ties keep
    // insertion order.
    async fn list_headcount(&self) -> StoreResult<Vec<HeadcountRecord>> {
        let mut records = self.headcount.list().await;
        records.sort_by(|a, b| a.month.cmp(&b.month));
        Ok(records)
    }

    async fn create_headcount(&self, input: &CreateHeadcount) -> StoreResult<HeadcountRecord> {
        Ok(self.headcount.create(input).await)
    }

    async fn update_headcount(
        &self,
        id: DbId,
        input: &UpdateHeadcount,
    ) -> StoreResult<HeadcountRecord> {
        self.headcount.update(id, input).await
    }

    async fn delete_headcount(&self, id: DbId) -> StoreResult<()> {
        self.headcount.delete(id).await
    }
}
