//! Repository for the `offers` table.

use sqlx::PgPool;

use hiretrack_core::offer::Offer;
use hiretrack_core::types::DbId;

use crate::models::offer::OfferRow;

const COLUMNS: &str =
    "id, candidate_name, role_title, offer_date, join_date, status, package_amount";

/// Provides CRUD operations for offers.
pub struct OfferRepo;

impl OfferRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<OfferRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM offers ORDER BY created_at DESC");
        sqlx::query_as::<_, OfferRow>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<OfferRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM offers WHERE id = $1");
        sqlx::query_as::<_, OfferRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, o: &Offer) -> Result<OfferRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO offers (candidate_name, role_title, offer_date, join_date, status, package_amount)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OfferRow>(&query)
            .bind(&o.candidate_name)
            .bind(&o.role_title)
            .bind(o.offer_date)
            .bind(o.join_date)
            .bind(o.status.as_str())
            .bind(o.package_amount)
            .fetch_one(pool)
            .await
    }

    pub async fn update(pool: &PgPool, o: &Offer) -> Result<Option<OfferRow>, sqlx::Error> {
        let query = format!(
            "UPDATE offers SET
                candidate_name = $2, role_title = $3, offer_date = $4, join_date = $5,
                status = $6, package_amount = $7, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OfferRow>(&query)
            .bind(o.id)
            .bind(&o.candidate_name)
            .bind(&o.role_title)
            .bind(o.offer_date)
            .bind(o.join_date)
            .bind(o.status.as_str())
            .bind(o.package_amount)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM offers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
