use chrono::NaiveDate;
use sqlx::FromRow;

use hiretrack_core::error::CoreError;
use hiretrack_core::interview::Interview;
use hiretrack_core::types::DbId;

/// A row from the `interviews` table.
#[derive(Debug, Clone, FromRow)]
pub struct InterviewRow {
    pub id: DbId,
    pub candidate_name: String,
    pub stage: String,
    pub date: NaiveDate,
    pub panel: Vec<String>,
    pub role_title: String,
}

impl TryFrom<InterviewRow> for Interview {
    type Error = CoreError;

    fn try_from(row: InterviewRow) -> Result<Self, Self::Error> {
        Ok(Interview {
            id: row.id,
            candidate_name: row.candidate_name,
            stage: row.stage.parse()?,
            date: row.date,
            panel: row.panel,
            role_title: row.role_title,
        })
    }
}
