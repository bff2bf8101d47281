//! Repository for the `attrition` table.

use sqlx::PgPool;

use hiretrack_core::attrition::Attrition;
use hiretrack_core::types::DbId;

use crate::models::attrition::AttritionRow;

const COLUMNS: &str = "id, employee_name, role, exit_date, reason";

/// PostgreSQL `undefined_table`.
const UNDEFINED_TABLE: &str = "42P01";

/// Provides CRUD operations for attrition records.
pub struct AttritionRepo;

impl AttritionRepo {
    /// List exits, most recent first.
    ///
    /// Returns an empty list when the table does not exist yet, so the
    /// dashboard still renders against a partially migrated database.
    pub async fn list(pool: &PgPool) -> Result<Vec<AttritionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attrition ORDER BY exit_date DESC");
        match sqlx::query_as::<_, AttritionRow>(&query).fetch_all(pool).await {
            Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some(UNDEFINED_TABLE) => {
                tracing::warn!("attrition table missing, returning no records");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AttritionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attrition WHERE id = $1");
        sqlx::query_as::<_, AttritionRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, a: &Attrition) -> Result<AttritionRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO attrition (employee_name, role, exit_date, reason)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AttritionRow>(&query)
            .bind(&a.employee_name)
            .bind(&a.role)
            .bind(a.exit_date)
            .bind(&a.reason)
            .fetch_one(pool)
            .await
    }

    pub async fn update(pool: &PgPool, a: &Attrition) -> Result<Option<AttritionRow>, sqlx::Error> {
        let query = format!(
            "UPDATE attrition SET
                employee_name = $2, role = $3, exit_date = $4, reason = $5, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AttritionRow>(&query)
            .bind(a.id)
            .bind(&a.employee_name)
            .bind(&a.role)
            .bind(a.exit_date)
            .bind(&a.reason)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM attrition WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
