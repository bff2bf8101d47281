//! Repository for the `roles` table.

use sqlx::PgPool;

use hiretrack_core::role::Role;
use hiretrack_core::types::DbId;

use crate::models::role::RoleRow;

/// `function` is a reserved word and must stay quoted.
const COLUMNS: &str = "id, title, ta_owner, status, days_open, pipeline_count, interviews, \
     offer_status, is_critical, \"function\"";

/// Provides CRUD operations for roles.
pub struct RoleRepo;

impl RoleRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<RoleRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles ORDER BY created_at DESC");
        sqlx::query_as::<_, RoleRow>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<RoleRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE id = $1");
        sqlx::query_as::<_, RoleRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, r: &Role) -> Result<RoleRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO roles (title, ta_owner, status, days_open, pipeline_count, interviews,
                offer_status, is_critical, \"function\")
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoleRow>(&query)
            .bind(&r.title)
            .bind(&r.ta_owner)
            .bind(r.status.as_str())
            .bind(r.days_open)
            .bind(r.pipeline_count)
            .bind(r.interviews)
            .bind(&r.offer_status)
            .bind(r.is_critical)
            .bind(&r.function)
            .fetch_one(pool)
            .await
    }

    pub async fn update(pool: &PgPool, r: &Role) -> Result<Option<RoleRow>, sqlx::Error> {
        let query = format!(
            "UPDATE roles SET
                title = $2, ta_owner = $3, status = $4, days_open = $5, pipeline_count = $6,
                interviews = $7, offer_status = $8, is_critical = $9, \"function\" = $10,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoleRow>(&query)
            .bind(r.id)
            .bind(&r.title)
            .bind(&r.ta_owner)
            .bind(r.status.as_str())
            .bind(r.days_open)
            .bind(r.pipeline_count)
            .bind(r.interviews)
            .bind(&r.offer_status)
            .bind(r.is_critical)
            .bind(&r.function)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
