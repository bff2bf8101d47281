//! Monthly headcount records.
//!
//! `month` is free text, conventionally `Mar'25`. Full month names are
//! accepted and normalized before comparing records (see
//! [`crate::headcount_chart::normalize_month`]).

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::headcount_chart::normalize_month;
use crate::types::{DbId, Entity};
use crate::validation::not_blank;

/// One month's staffing composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadcountRecord {
    pub id: DbId,
    pub month: String,
    pub existing_headcount: i32,
    pub new_joinees: i32,
    /// Comma-separated names.
    pub joiner_names: String,
    pub exits: i32,
    pub exiter_names: String,
    pub expected_joiners: i32,
    pub expected_joiner_roles: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHeadcount {
    #[validate(custom(function = "not_blank"))]
    pub month: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub existing_headcount: i32,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub new_joinees: i32,
    #[serde(default)]
    pub joiner_names: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub exits: i32,
    #[serde(default)]
    pub exiter_names: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub expected_joiners: i32,
    #[serde(default)]
    pub expected_joiner_roles: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHeadcount {
    #[validate(custom(function = "not_blank"))]
    pub month: Option<String>,
    #[validate(range(min = 0))]
    pub existing_headcount: Option<i32>,
    #[validate(range(min = 0))]
    pub new_joinees: Option<i32>,
    pub joiner_names: Option<String>,
    #[validate(range(min = 0))]
    pub exits: Option<i32>,
    pub exiter_names: Option<String>,
    #[validate(range(min = 0))]
    pub expected_joiners: Option<i32>,
    pub expected_joiner_roles: Option<String>,
}

impl Entity for HeadcountRecord {
    const NAME: &'static str = "Headcount";
    type Create = CreateHeadcount;
    type Update = UpdateHeadcount;

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: &CreateHeadcount) -> Self {
        Self {
            id,
            month: input.month.trim().to_string(),
            existing_headcount: input.existing_headcount,
            new_joinees: input.new_joinees,
            joiner_names: input.joiner_names.clone(),
            exits: input.exits,
            exiter_names: input.exiter_names.clone(),
            expected_joiners: input.expected_joiners,
            expected_joiner_roles: input.expected_joiner_roles.clone(),
        }
    }

    fn apply_update(&mut self, update: &UpdateHeadcount) {
        if let Some(month) = &update.month {
            self.month = month.trim().to_string();
        }
        if let Some(v) = update.existing_headcount {
            self.existing_headcount = v;
        }
        if let Some(v) = update.new_joinees {
            self.new_joinees = v;
        }
        if let Some(names) = &update.joiner_names {
            self.joiner_names = names.clone();
        }
        if let Some(v) = update.exits {
            self.exits = v;
        }
        if let Some(names) = &update.exiter_names {
            self.exiter_names = names.clone();
        }
        if let Some(v) = update.expected_joiners {
            self.expected_joiners = v;
        }
        if let Some(roles) = &update.expected_joiner_roles {
            self.expected_joiner_roles = roles.clone();
        }
    }
}

/// Reject a month whose normalized label is already used by another record.
///
/// `editing` is the record being updated; it may keep its own month.
pub fn validate_month_available(
    existing: &[HeadcountRecord],
    month: &str,
    editing: Option<DbId>,
) -> Result<(), CoreError> {
    let wanted = normalize_month(month.trim());
    let taken = existing
        .iter()
        .filter(|r| Some(r.id) != editing)
        .any(|r| normalize_month(&r.month) == wanted);
    if taken {
        return Err(CoreError::Validation(format!(
            "A headcount record for '{wanted}' already exists. Edit it or choose a different month"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    use crate::validation::validate_input;

    fn record(id: u128, month: &str) -> HeadcountRecord {
        HeadcountRecord {
            id: DbId::from_u128(id),
            month: month.to_string(),
            existing_headcount: 40,
            new_joinees: 0,
            joiner_names: String::new(),
            exits: 0,
            exiter_names: String::new(),
            expected_joiners: 0,
            expected_joiner_roles: String::new(),
        }
    }

    #[test]
    fn new_record_with_existing_month_is_rejected() {
        let existing = vec![record(1, "Mar'25")];
        assert_matches!(
            validate_month_available(&existing, "Mar'25", None),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            validate_month_available(&existing, "March'25", None),
            Err(CoreError::Validation(_))
        );
        assert!(validate_month_available(&existing, "Apr'25", None).is_ok());
    }

    #[test]
    fn editing_record_may_keep_its_month() {
        let existing = vec![record(1, "Mar'25"), record(2, "Apr'25")];
        assert!(validate_month_available(&existing, "Mar'25", Some(DbId::from_u128(1))).is_ok());
        assert!(validate_month_available(&existing, "Apr'25", Some(DbId::from_u128(1))).is_err());
    }

    #[test]
    fn counts_must_be_non_negative() {
        let input: CreateHeadcount = serde_json::from_value(serde_json::json!({
            "month": "Jan'25",
            "existingHeadcount": 45,
            "exits": -2
        }))
        .unwrap();
        assert_matches!(validate_input(&input), Err(CoreError::Validation(_)));
    }

    #[test]
    fn blank_month_is_rejected() {
        let input: CreateHeadcount =
            serde_json::from_value(serde_json::json!({ "month": "  " })).unwrap();
        assert!(validate_input(&input).is_err());
    }

    #[test]
    fn create_trims_month() {
        let input: CreateHeadcount = serde_json::from_value(serde_json::json!({
            "month": " Feb'25 ",
            "existingHeadcount": 47,
            "newJoinees": 2,
            "joinerNames": "Asha, Vikram"
        }))
        .unwrap();
        let r = HeadcountRecord::from_create(DbId::nil(), &input);
        assert_eq!(r.month, "Feb'25");
        assert_eq!(r.new_joinees, 2);
        assert_eq!(r.exiter_names, "");
    }
}
