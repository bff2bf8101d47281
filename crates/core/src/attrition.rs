//! Employee exits. Used for the monthly attrition count.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Entity};
use crate::validation::{non_blank, not_blank};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attrition {
    pub id: DbId,
    pub employee_name: String,
    pub role: String,
    pub exit_date: NaiveDate,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttrition {
    #[validate(custom(function = "not_blank"))]
    pub employee_name: String,
    #[validate(custom(function = "not_blank"))]
    pub role: String,
    pub exit_date: NaiveDate,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttrition {
    #[validate(custom(function = "not_blank"))]
    pub employee_name: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub role: Option<String>,
    pub exit_date: Option<NaiveDate>,
    pub reason: Option<String>,
}

impl Entity for Attrition {
    const NAME: &'static str = "Attrition";
    type Create = CreateAttrition;
    type Update = UpdateAttrition;

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: &CreateAttrition) -> Self {
        Self {
            id,
            employee_name: input.employee_name.trim().to_string(),
            role: input.role.clone(),
            exit_date: input.exit_date,
            reason: non_blank(input.reason.as_deref()),
        }
    }

    fn apply_update(&mut self, update: &UpdateAttrition) {
        if let Some(employee_name) = &update.employee_name {
            self.employee_name = employee_name.trim().to_string();
        }
        if let Some(role) = &update.role {
            self.role = role.clone();
        }
        if let Some(exit_date) = update.exit_date {
            self.exit_date = exit_date;
        }
        if let Some(reason) = &update.reason {
            self.reason = non_blank(Some(reason.as_str()));
        }
    }
}
