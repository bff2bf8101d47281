//! Repository for the `headcount_summary` table.

use sqlx::PgPool;

use hiretrack_core::headcount::HeadcountRecord;
use hiretrack_core::types::DbId;

use crate::models::headcount::HeadcountRow;

const COLUMNS: &str = "id, month, existing_headcount, new_joinees, joiner_names, exits, \
     exiter_names, expected_joiners, expected_joiner_roles";

/// Provides CRUD operations for monthly headcount records.
pub struct HeadcountRepo;

impl HeadcountRepo {
    /// List records ordered by month label, then insertion time.
    ///
    /// The chart keeps the first record for each month, so this order
    /// decides which duplicate wins: `Mar'25` sorts before `March'25`.
    pub async fn list(pool: &PgPool) -> Result<Vec<HeadcountRow>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM headcount_summary ORDER BY month, created_at, id");
        sqlx::query_as::<_, HeadcountRow>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HeadcountRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM headcount_summary WHERE id = $1");
        sqlx::query_as::<_, HeadcountRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, h: &HeadcountRecord) -> Result<HeadcountRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO headcount_summary (month, existing_headcount, new_joinees, joiner_names,
                exits, exiter_names, expected_joiners, expected_joiner_roles)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeadcountRow>(&query)
            .bind(&h.month)
            .bind(h.existing_headcount)
            .bind(h.new_joinees)
            .bind(&h.joiner_names)
            .bind(h.exits)
            .bind(&h.exiter_names)
            .bind(h.expected_joiners)
            .bind(&h.expected_joiner_roles)
            .fetch_one(pool)
            .await
    }

    pub async fn update(pool: &PgPool, h: &HeadcountRecord) -> Result<Option<HeadcountRow>, sqlx::Error> {
        let query = format!(
            "UPDATE headcount_summary SET
                month = $2, existing_headcount = $3, new_joinees = $4, joiner_names = $5,
                exits = $6, exiter_names = $7, expected_joiners = $8,
                expected_joiner_roles = $9, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeadcountRow>(&query)
            .bind(h.id)
            .bind(&h.month)
            .bind(h.existing_headcount)
            .bind(h.new_joinees)
            .bind(&h.joiner_names)
            .bind(h.exits)
            .bind(&h.exiter_names)
            .bind(h.expected_joiners)
            .bind(&h.expected_joiner_roles)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM headcount_summary WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
