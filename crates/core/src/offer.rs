//! Offers extended to candidates. Used for the monthly joiner counts.

use serde::{Deserialize, Serialize};
use validator::Validate;

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::types::{DbId, Entity};
use crate::validation::not_blank;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfferStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Joined,
}

impl OfferStatus {
    pub const ALL: [OfferStatus; 4] = [Self::Pending, Self::Accepted, Self::Rejected, Self::Joined];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Joined => "Joined",
        }
    }
}

impl std::str::FromStr for OfferStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Invalid offer status '{s}'")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: DbId,
    pub candidate_name: String,
    pub role_title: String,
    pub offer_date: Option<NaiveDate>,
    pub join_date: Option<NaiveDate>,
    pub status: OfferStatus,
    pub package_amount: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOffer {
    #[validate(custom(function = "not_blank"))]
    pub candidate_name: String,
    #[validate(custom(function = "not_blank"))]
    pub role_title: String,
    pub offer_date: Option<NaiveDate>,
    pub join_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: OfferStatus,
    #[validate(range(min = 0.0))]
    pub package_amount: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOffer {
    #[validate(custom(function = "not_blank"))]
    pub candidate_name: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub role_title: Option<String>,
    pub offer_date: Option<NaiveDate>,
    pub join_date: Option<NaiveDate>,
    pub status: Option<OfferStatus>,
    #[validate(range(min = 0.0))]
    pub package_amount: Option<f64>,
}

impl Entity for Offer {
    const NAME: &'static str = "Offer";
    type Create = CreateOffer;
    type Update = UpdateOffer;

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: &CreateOffer) -> Self {
        Self {
            id,
            candidate_name: input.candidate_name.trim().to_string(),
            role_title: input.role_title.clone(),
            offer_date: input.offer_date,
            join_date: input.join_date,
            status: input.status,
            package_amount: input.package_amount,
        }
    }

    fn apply_update(&mut self, update: &UpdateOffer) {
        if let Some(candidate_name) = &update.candidate_name {
            self.candidate_name = candidate_name.trim().to_string();
        }
        if let Some(role_title) = &update.role_title {
            self.role_title = role_title.clone();
        }
        if update.offer_date.is_some() {
            self.offer_date = update.offer_date;
        }
        if update.join_date.is_some() {
            self.join_date = update.join_date;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if update.package_amount.is_some() {
            self.package_amount = update.package_amount;
        }
    }
}
