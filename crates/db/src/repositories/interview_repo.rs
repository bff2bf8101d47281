//! Repository for the `interviews` table.

use sqlx::PgPool;

use hiretrack_core::interview::Interview;
use hiretrack_core::types::DbId;

use crate::models::interview::InterviewRow;

const COLUMNS: &str = "id, candidate_name, stage, date, panel, role_title";

/// Provides CRUD operations for interviews.
pub struct InterviewRepo;

impl InterviewRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<InterviewRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interviews ORDER BY created_at DESC");
        sqlx::query_as::<_, InterviewRow>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<InterviewRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interviews WHERE id = $1");
        sqlx::query_as::<_, InterviewRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, i: &Interview) -> Result<InterviewRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO interviews (candidate_name, stage, date, panel, role_title)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InterviewRow>(&query)
            .bind(&i.candidate_name)
            .bind(i.stage.as_str())
            .bind(i.date)
            .bind(&i.panel)
            .bind(&i.role_title)
            .fetch_one(pool)
            .await
    }

    pub async fn update(pool: &PgPool, i: &Interview) -> Result<Option<InterviewRow>, sqlx::Error> {
        let query = format!(
            "UPDATE interviews SET
                candidate_name = $2, stage = $3, date = $4, panel = $5, role_title = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InterviewRow>(&query)
            .bind(i.id)
            .bind(&i.candidate_name)
            .bind(i.stage.as_str())
            .bind(i.date)
            .bind(&i.panel)
            .bind(&i.role_title)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM interviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
