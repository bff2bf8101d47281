use async_trait::async_trait;

use hiretrack_core::attrition::{Attrition, CreateAttrition, UpdateAttrition};
use hiretrack_core::bottleneck::{Bottleneck, CreateBottleneck, UpdateBottleneck};
use hiretrack_core::candidate::{Candidate, CreateCandidate, UpdateCandidate};
use hiretrack_core::error::CoreError;
use hiretrack_core::headcount::{CreateHeadcount, HeadcountRecord, UpdateHeadcount};
use hiretrack_core::interview::{CreateInterview, Interview, UpdateInterview};
use hiretrack_core::offer::{CreateOffer, Offer, UpdateOffer};
use hiretrack_core::role::{CreateRole, Role, UpdateRole};
use hiretrack_core::types::{DbId, Entity};

use crate::repositories::{
    AttritionRepo, BottleneckRepo, CandidateRepo, HeadcountRepo, InterviewRepo, OfferRepo,
    RoleRepo, TaOwnerRepo,
};
use crate::DbPool;

use super::{RecruitmentStore, StoreError, StoreMode, StoreResult};

/// Store backed by PostgreSQL.
///
/// Updates read the current row, apply the DTO in memory and write every
/// column back, so cleared optional fields and normalized lists behave the
/// same as in the local store.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

fn not_found<E: Entity>(id: DbId) -> StoreError {
    StoreError::Core(CoreError::NotFound {
        entity: E::NAME,
        id,
    })
}

fn ensure_deleted<E: Entity>(deleted: bool, id: DbId) -> StoreResult<()> {
    if deleted {
        Ok(())
    } else {
        Err(not_found::<E>(id))
    }
}

fn convert_all<R, E>(rows: Vec<R>) -> StoreResult<Vec<E>>
where
    E: TryFrom<R>,
    StoreError: From<E::Error>,
{
    rows.into_iter()
        .map(|row| E::try_from(row).map_err(StoreError::from))
        .collect()
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Connect, check health and apply migrations.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = crate::create_pool(database_url).await?;
        crate::health_check(&pool).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl RecruitmentStore for PgStore {
    fn mode(&self) -> StoreMode {
        StoreMode::Remote
    }

    fn notice(&self) -> Option<String> {
        None
    }

    // -- Candidates --

    async fn list_candidates(&self) -> StoreResult<Vec<Candidate>> {
        convert_all(CandidateRepo::list(&self.pool).await?)
    }

    async fn create_candidate(&self, input: &CreateCandidate) -> StoreResult<Candidate> {
        let candidate = Candidate::from_create(DbId::nil(), input);
        let row = CandidateRepo::create(&self.pool, &candidate).await?;
        tracing::debug!(id = %row.id, "Created candidate");
        Ok(row.try_into()?)
    }

    async fn update_candidate(&self, id: DbId, input: &UpdateCandidate) -> StoreResult<Candidate> {
        let row = CandidateRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| not_found::<Candidate>(id))?;
        let mut candidate = Candidate::try_from(row)?;
        candidate.apply_update(input);
        let row = CandidateRepo::update(&self.pool, &candidate)
            .await?
            .ok_or_else(|| not_found::<Candidate>(id))?;
        Ok(row.try_into()?)
    }

    async fn set_candidate_rating(&self, id: DbId, rating: Option<u8>) -> StoreResult<Candidate> {
        let row = CandidateRepo::set_rating(&self.pool, id, rating)
            .await?
            .ok_or_else(|| not_found::<Candidate>(id))?;
        Ok(row.try_into()?)
    }

    async fn delete_candidate(&self, id: DbId) -> StoreResult<()> {
        ensure_deleted::<Candidate>(CandidateRepo::delete(&self.pool, id).await?, id)
    }

    // -- Roles --

    async fn list_roles(&self) -> StoreResult<Vec<Role>> {
        convert_all(RoleRepo::list(&self.pool).await?)
    }

    async fn create_role(&self, input: &CreateRole) -> StoreResult<Role> {
        let role = Role::from_create(DbId::nil(), input);
        let row = RoleRepo::create(&self.pool, &role).await?;
        tracing::debug!(id = %row.id, title = %row.title, "Created role");
        Ok(row.try_into()?)
    }

    async fn update_role(&self, id: DbId, input: &UpdateRole) -> StoreResult<Role> {
        let row = RoleRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| not_found::<Role>(id))?;
        let mut role = Role::try_from(row)?;
        role.apply_update(input);
        let row = RoleRepo::update(&self.pool, &role)
            .await?
            .ok_or_else(|| not_found::<Role>(id))?;
        Ok(row.try_into()?)
    }

    async fn delete_role(&self, id: DbId) -> StoreResult<()> {
        ensure_deleted::<Role>(RoleRepo::delete(&self.pool, id).await?, id)
    }

    // -- Interviews --

    async fn list_interviews(&self) -> StoreResult<Vec<Interview>> {
        convert_all(InterviewRepo::list(&self.pool).await?)
    }

    async fn create_interview(&self, input: &CreateInterview) -> StoreResult<Interview> {
        let interview = Interview::from_create(DbId::nil(), input);
        let row = InterviewRepo::create(&self.pool, &interview).await?;
        Ok(row.try_into()?)
    }

    async fn update_interview(&self, id: DbId, input: &UpdateInterview) -> StoreResult<Interview> {
        let row = InterviewRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| not_found::<Interview>(id))?;
        let mut interview = Interview::try_from(row)?;
        interview.apply_update(input);
        let row = InterviewRepo::update(&self.pool, &interview)
            .await?
            .ok_or_else(|| not_found::<Interview>(id))?;
        Ok(row.try_into()?)
    }

    async fn delete_interview(&self, id: DbId) -> StoreResult<()> {
        ensure_deleted::<Interview>(InterviewRepo::delete(&self.pool, id).await?, id)
    }

    // -- Bottlenecks --

    async fn list_bottlenecks(&self) -> StoreResult<Vec<Bottleneck>> {
        convert_all(BottleneckRepo::list(&self.pool).await?)
    }

    async fn create_bottleneck(&self, input: &CreateBottleneck) -> StoreResult<Bottleneck> {
        let bottleneck = Bottleneck::from_create(DbId::nil(), input);
        Ok(BottleneckRepo::create(&self.pool, &bottleneck).await?.into())
    }

    async fn update_bottleneck(
        &self,
        id: DbId,
        input: &UpdateBottleneck,
    ) -> StoreResult<Bottleneck> {
        let mut bottleneck: Bottleneck = BottleneckRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| not_found::<Bottleneck>(id))?
            .into();
        bottleneck.apply_update(input);
        let row = BottleneckRepo::update(&self.pool, &bottleneck)
            .await?
            .ok_or_else(|| not_found::<Bottleneck>(id))?;
        Ok(row.into())
    }

    async fn delete_bottleneck(&self, id: DbId) -> StoreResult<()> {
        ensure_deleted::<Bottleneck>(BottleneckRepo::delete(&self.pool, id).await?, id)
    }

    // -- TA owners --

    async fn list_ta_owners(&self) -> StoreResult<Vec<String>> {
        let rows = TaOwnerRepo::list(&self.pool).await?;
        Ok(rows.into_iter().map(|r| r.name).collect())
    }

    async fn replace_ta_owners(&self, owners: &[String]) -> StoreResult<Vec<String>> {
        TaOwnerRepo::replace_all(&self.pool, owners).await?;
        tracing::debug!(count = owners.len(), "Replaced TA owners");
        self.list_ta_owners().await
    }

    // -- Offers --

    async fn list_offers(&self) -> StoreResult<Vec<Offer>> {
        convert_all(OfferRepo::list(&self.pool).await?)
    }

    async fn create_offer(&self, input: &CreateOffer) -> StoreResult<Offer> {
        let offer = Offer::from_create(DbId::nil(), input);
        Ok(OfferRepo::create(&self.pool, &offer).await?.try_into()?)
    }

    async fn update_offer(&self, id: DbId, input: &UpdateOffer) -> StoreResult<Offer> {
        let row = OfferRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| not_found::<Offer>(id))?;
        let mut offer = Offer::try_from(row)?;
        offer.apply_update(input);
        let row = OfferRepo::update(&self.pool, &offer)
            .await?
            .ok_or_else(|| not_found::<Offer>(id))?;
        Ok(row.try_into()?)
    }

    async fn delete_offer(&self, id: DbId) -> StoreResult<()> {
        ensure_deleted::<Offer>(OfferRepo::delete(&self.pool, id).await?, id)
    }

    // -- Attrition --

    async fn list_attrition(&self) -> StoreResult<Vec<Attrition>> {
        convert_all(AttritionRepo::list(&self.pool).await?)
    }

    async fn create_attrition(&self, input: &CreateAttrition) -> StoreResult<Attrition> {
        let exit = Attrition::from_create(DbId::nil(), input);
        Ok(AttritionRepo::create(&self.pool, &exit).await?.into())
    }

    async fn update_attrition(&self, id: DbId, input: &UpdateAttrition) -> StoreResult<Attrition> {
        let mut exit: Attrition = AttritionRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| not_found::<Attrition>(id))?
            .into();
        exit.apply_update(input);
        let row = AttritionRepo::update(&self.pool, &exit)
            .await?
            .ok_or_else(|| not_found::<Attrition>(id))?;
        Ok(row.into())
    }

    async fn delete_attrition(&self, id: DbId) -> StoreResult<()> {
        ensure_deleted::<Attrition>(AttritionRepo::delete(&self.pool, id).await?, id)
    }

    // -- Headcount --

    async fn list_headcount(&self) -> StoreResult<Vec<HeadcountRecord>> {
        convert_all(HeadcountRepo::list(&self.pool).await?)
    }

    async fn create_headcount(&self, input: &CreateHeadcount) -> StoreResult<HeadcountRecord> {
        let record = HeadcountRecord::from_create(DbId::nil(), input);
        let row = HeadcountRepo::create(&self.pool, &record).await?;
        tracing::debug!(id = %row.id, month = %row.month, "Created headcount record");
        Ok(row.into())
    }

    async fn update_headcount(
        &self,
        id: DbId,
        input: &UpdateHeadcount,
    ) -> StoreResult<HeadcountRecord> {
        let mut record: HeadcountRecord = HeadcountRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| not_found::<HeadcountRecord>(id))?
            .into();
        record.apply_update(input);
        let row = HeadcountRepo::update(&self.pool, &record)
            .await?
            .ok_or_else(|| not_found::<HeadcountRecord>(id))?;
        Ok(row.into())
    }

    async fn delete_headcount(&self, id: DbId) -> StoreResult<()> {
        ensure_deleted::<HeadcountRecord>(HeadcountRepo::delete(&self.pool, id).await?, id)
    }
}
