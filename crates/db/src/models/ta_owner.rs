use sqlx::FromRow;

use hiretrack_core::types::DbId;

/// A row from the `ta_owners` table.
#[derive(Debug, Clone, FromRow)]
pub struct TaOwnerRow {
    pub id: DbId,
    pub name: String,
}
