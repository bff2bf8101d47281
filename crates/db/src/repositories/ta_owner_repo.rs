//! Repository for the `ta_owners` table.

use sqlx::PgPool;

use crate::models::ta_owner::TaOwnerRow;

/// Provides list and replace-all for TA owners.
pub struct TaOwnerRepo;

impl TaOwnerRepo {
    /// List owners ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<TaOwnerRow>, sqlx::Error> {
        sqlx::query_as::<_, TaOwnerRow>("SELECT id, name FROM ta_owners ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Replace the whole list in one transaction.
    pub async fn replace_all(pool: &PgPool, names: &[String]) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM ta_owners")
            .execute(&mut *tx)
            .await?;

        for name in names {
            sqlx::query("INSERT INTO ta_owners (name) VALUES ($1)")
                .bind(name)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
