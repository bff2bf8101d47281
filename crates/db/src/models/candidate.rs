use sqlx::FromRow;

use hiretrack_core::candidate::{Candidate, Compensation, Experience};
use hiretrack_core::error::CoreError;
use hiretrack_core::types::DbId;

/// A row from the `candidates` table.
#[derive(Debug, Clone, FromRow)]
pub struct CandidateRow {
    pub id: DbId,
    pub name: String,
    pub photo: Option<String>,
    pub company: String,
    pub designation: String,
    pub experience: i32,
    pub notice_period: String,
    pub current_ctc: Option<f64>,
    pub expected_ctc: Option<f64>,
    pub role: String,
    pub stage: String,
    pub notes: String,
    pub tags: Vec<String>,
    pub rating: Option<i16>,
}

impl TryFrom<CandidateRow> for Candidate {
    type Error = CoreError;

    fn try_from(row: CandidateRow) -> Result<Self, Self::Error> {
        Ok(Candidate {
            id: row.id,
            name: row.name,
            photo: row.photo,
            company: row.company,
            designation: row.designation,
            experience: Experience::from_stored(row.experience),
            notice_period: row.notice_period,
            current_ctc: Compensation::from_stored(row.current_ctc),
            expected_ctc: Compensation::from_stored(row.expected_ctc),
            role: row.role,
            stage: row.stage.parse()?,
            notes: row.notes,
            tags: row.tags,
            rating: row
                .rating
                .and_then(|r| u8::try_from(r).ok())
                .filter(|r| (1..=5).contains(r)),
        })
    }
}
