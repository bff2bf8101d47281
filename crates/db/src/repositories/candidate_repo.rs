//! Repository for the `candidates` table.

use sqlx::PgPool;

use hiretrack_core::candidate::Candidate;
use hiretrack_core::types::DbId;

use crate::models::candidate::CandidateRow;

const COLUMNS: &str = "id, name, photo, company, designation, experience, notice_period, \
     current_ctc, expected_ctc, role, stage, notes, tags, rating";

/// Provides CRUD operations for candidates.
pub struct CandidateRepo;

impl CandidateRepo {
    /// List candidates, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<CandidateRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM candidates ORDER BY created_at DESC");
        sqlx::query_as::<_, CandidateRow>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CandidateRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM candidates WHERE id = $1");
        sqlx::query_as::<_, CandidateRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a candidate. The id on `c` is ignored; the database assigns one.
    pub async fn create(pool: &PgPool, c: &Candidate) -> Result<CandidateRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO candidates (name, photo, company, designation, experience, notice_period,
                current_ctc, expected_ctc, role, stage, notes, tags, rating)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CandidateRow>(&query)
            .bind(&c.name)
            .bind(&c.photo)
            .bind(&c.company)
            .bind(&c.designation)
            .bind(c.experience.to_stored())
            .bind(&c.notice_period)
            .bind(c.current_ctc.to_stored())
            .bind(c.expected_ctc.to_stored())
            .bind(&c.role)
            .bind(c.stage.as_str())
            .bind(&c.notes)
            .bind(&c.tags)
            .bind(c.rating.map(i16::from))
            .fetch_one(pool)
            .await
    }

    /// Overwrite every column of the candidate with `c.id`.
    ///
    /// Returns `None` if no such row exists.
    pub async fn update(pool: &PgPool, c: &Candidate) -> Result<Option<CandidateRow>, sqlx::Error> {
        let query = format!(
            "UPDATE candidates SET
                name = $2, photo = $3, company = $4, designation = $5, experience = $6,
                notice_period = $7, current_ctc = $8, expected_ctc = $9, role = $10,
                stage = $11, notes = $12, tags = $13, rating = $14, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CandidateRow>(&query)
            .bind(c.id)
            .bind(&c.name)
            .bind(&c.photo)
            .bind(&c.company)
            .bind(&c.designation)
            .bind(c.experience.to_stored())
            .bind(&c.notice_period)
            .bind(c.current_ctc.to_stored())
            .bind(c.expected_ctc.to_stored())
            .bind(&c.role)
            .bind(c.stage.as_str())
            .bind(&c.notes)
            .bind(&c.tags)
            .bind(c.rating.map(i16::from))
            .fetch_optional(pool)
            .await
    }

    /// Set or clear the star rating only.
    pub async fn set_rating(
        pool: &PgPool,
        id: DbId,
        rating: Option<u8>,
    ) -> Result<Option<CandidateRow>, sqlx::Error> {
        let query = format!(
            "UPDATE candidates SET rating = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CandidateRow>(&query)
            .bind(id)
            .bind(rating.map(i16::from))
            .fetch_optional(pool)
            .await
    }

    /// Delete a candidate. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
