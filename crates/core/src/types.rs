/// Primary keys are UUIDs assigned on insert (by PostgreSQL, or by the
/// local store when the database is unavailable).
pub type DbId = uuid::Uuid;

/// A stored record with an identifier and create/update DTOs.
///
/// Implemented by every entity kept in a row store. The local store uses
/// this to create and patch records without knowing their fields.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable entity name used in `NotFound` errors.
    const NAME: &'static str;

    /// Payload accepted when inserting a new record.
    type Create: Send + Sync;

    /// Partial payload accepted when updating an existing record.
    type Update: Send + Sync;

    fn id(&self) -> DbId;

    /// Build a new record from its create payload and an assigned id.
    fn from_create(id: DbId, input: &Self::Create) -> Self;

    /// Apply every `Some` field of `update` onto `self`.
    fn apply_update(&mut self, update: &Self::Update);
}
