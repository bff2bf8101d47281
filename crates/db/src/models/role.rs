use sqlx::FromRow;

use hiretrack_core::error::CoreError;
use hiretrack_core::role::Role;
use hiretrack_core::types::DbId;

/// A row from the `roles` table.
#[derive(Debug, Clone, FromRow)]
pub struct RoleRow {
    pub id: DbId,
    pub title: String,
    pub ta_owner: String,
    pub status: String,
    pub days_open: i32,
    pub pipeline_count: i32,
    pub interviews: i32,
    pub offer_status: String,
    pub is_critical: bool,
    pub function: Option<String>,
}

impl TryFrom<RoleRow> for Role {
    type Error = CoreError;

    fn try_from(row: RoleRow) -> Result<Self, Self::Error> {
        Ok(Role {
            id: row.id,
            title: row.title,
            ta_owner: row.ta_owner,
            status: row.status.parse()?,
            days_open: row.days_open,
            pipeline_count: row.pipeline_count,
            interviews: row.interviews,
            offer_status: row.offer_status,
            is_critical: row.is_critical,
            function: row.function.filter(|f| !f.trim().is_empty()),
        })
    }
}
