//! Repository for the `bottlenecks` table.

use sqlx::PgPool;

use hiretrack_core::bottleneck::Bottleneck;
use hiretrack_core::types::DbId;

use crate::models::bottleneck::BottleneckRow;

const COLUMNS: &str = "id, description, role_title";

/// Provides CRUD operations for bottlenecks.
pub struct BottleneckRepo;

impl BottleneckRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<BottleneckRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bottlenecks ORDER BY created_at DESC");
        sqlx::query_as::<_, BottleneckRow>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BottleneckRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bottlenecks WHERE id = $1");
        sqlx::query_as::<_, BottleneckRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, b: &Bottleneck) -> Result<BottleneckRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO bottlenecks (description, role_title)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BottleneckRow>(&query)
            .bind(&b.description)
            .bind(&b.role_title)
            .fetch_one(pool)
            .await
    }

    pub async fn update(pool: &PgPool, b: &Bottleneck) -> Result<Option<BottleneckRow>, sqlx::Error> {
        let query = format!(
            "UPDATE bottlenecks SET description = $2, role_title = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BottleneckRow>(&query)
            .bind(b.id)
            .bind(&b.description)
            .bind(&b.role_title)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bottlenecks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
