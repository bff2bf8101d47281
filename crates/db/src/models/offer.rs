use chrono::NaiveDate;
use sqlx::FromRow;

use hiretrack_core::error::CoreError;
use hiretrack_core::offer::Offer;
use hiretrack_core::types::DbId;

/// A row from the `offers` table.
#[derive(Debug, Clone, FromRow)]
pub struct OfferRow {
    pub id: DbId,
    pub candidate_name: String,
    pub role_title: String,
    pub offer_date: Option<NaiveDate>,
    pub join_date: Option<NaiveDate>,
    pub status: String,
    pub package_amount: Option<f64>,
}

impl TryFrom<OfferRow> for Offer {
    type Error = CoreError;

    fn try_from(row: OfferRow) -> Result<Self, Self::Error> {
        Ok(Offer {
            id: row.id,
            candidate_name: row.candidate_name,
            role_title: row.role_title,
            offer_date: row.offer_date,
            join_date: row.join_date,
            status: row.status.parse()?,
            package_amount: row.package_amount,
        })
    }
}
