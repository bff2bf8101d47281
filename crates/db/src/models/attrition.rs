use chrono::NaiveDate;
use sqlx::FromRow;

use hiretrack_core::attrition::Attrition;
use hiretrack_core::types::DbId;

/// A row from the `attrition` table.
#[derive(Debug, Clone, FromRow)]
pub struct AttritionRow {
    pub id: DbId,
    pub employee_name: String,
    pub role: String,
    pub exit_date: NaiveDate,
    pub reason: Option<String>,
}

impl From<AttritionRow> for Attrition {
    fn from(row: AttritionRow) -> Self {
        Attrition {
            id: row.id,
            employee_name: row.employee_name,
            role: row.role,
            exit_date: row.exit_date,
            reason: row.reason,
        }
    }
}
