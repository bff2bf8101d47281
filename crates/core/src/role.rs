//! Open roles.
//!
//! A role's title is the join key used by candidates, interviews and
//! bottlenecks. Nothing cascades on rename or delete; titles are only kept
//! unique among the current roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{DbId, Entity};
use crate::validation::{non_blank, not_blank};

/// Functions offered by the role form. Custom values are accepted too.
pub const SUGGESTED_FUNCTIONS: &[&str] = &[
    "Product",
    "Engineering",
    "People Ops",
    "Business Ops",
    "Marketing",
    "Research and Development",
];

/// Grouping label for roles without a function.
pub const UNASSIGNED_FUNCTION: &str = "Unassigned";

/// Recruiting status of a role, ordered by funnel progress.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RoleStatus {
    #[default]
    Research,
    Sourcing,
    #[serde(rename = "Going Slow")]
    GoingSlow,
    Discussions,
    Offer,
    Closed,
}

impl RoleStatus {
    pub const ALL: [RoleStatus; 6] = [
        Self::Research,
        Self::Sourcing,
        Self::GoingSlow,
        Self::Discussions,
        Self::Offer,
        Self::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Research => "Research",
            Self::Sourcing => "Sourcing",
            Self::GoingSlow => "Going Slow",
            Self::Discussions => "Discussions",
            Self::Offer => "Offer",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for RoleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid role status '{s}'. Must be one of: {}",
                    Self::ALL.map(|st| st.as_str()).join(", ")
                ))
            })
    }
}

/// An open (or closed) role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: DbId,
    pub title: String,
    pub ta_owner: String,
    pub status: RoleStatus,
    pub days_open: i32,
    pub pipeline_count: i32,
    pub interviews: i32,
    pub offer_status: String,
    pub is_critical: bool,
    pub function: Option<String>,
}

impl Role {
    /// Every status except `Closed` counts as active.
    pub fn is_active(&self) -> bool {
        self.status != RoleStatus::Closed
    }

    /// The role's function, or `"Unassigned"`.
    pub fn function_label(&self) -> &str {
        self.function.as_deref().unwrap_or(UNASSIGNED_FUNCTION)
    }
}

/// DTO for creating a role.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRole {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[serde(default)]
    pub ta_owner: String,
    #[serde(default)]
    pub status: RoleStatus,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub days_open: i32,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub pipeline_count: i32,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub interviews: i32,
    #[serde(default)]
    pub offer_status: String,
    #[serde(default)]
    pub is_critical: bool,
    pub function: Option<String>,
}

/// DTO for updating a role. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRole {
    #[validate(custom(function = "not_blank"))]
    pub title: Option<String>,
    pub ta_owner: Option<String>,
    pub status: Option<RoleStatus>,
    #[validate(range(min = 0))]
    pub days_open: Option<i32>,
    #[validate(range(min = 0))]
    pub pipeline_count: Option<i32>,
    #[validate(range(min = 0))]
    pub interviews: Option<i32>,
    pub offer_status: Option<String>,
    pub is_critical: Option<bool>,
    /// An empty string clears the function.
    pub function: Option<String>,
}

impl Entity for Role {
    const NAME: &'static str = "Role";
    type Create = CreateRole;
    type Update = UpdateRole;

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: &CreateRole) -> Self {
        Self {
            id,
            title: input.title.trim().to_string(),
            ta_owner: input.ta_owner.clone(),
            status: input.status,
            days_open: input.days_open,
            pipeline_count: input.pipeline_count,
            interviews: input.interviews,
            offer_status: input.offer_status.clone(),
            is_critical: input.is_critical,
            function: non_blank(input.function.as_deref()),
        }
    }

    fn apply_update(&mut self, update: &UpdateRole) {
        if let Some(title) = &update.title {
            self.title = title.trim().to_string();
        }
        if let Some(ta_owner) = &update.ta_owner {
            self.ta_owner = ta_owner.clone();
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(days_open) = update.days_open {
            self.days_open = days_open;
        }
        if let Some(pipeline_count) = update.pipeline_count {
            self.pipeline_count = pipeline_count;
        }
        if let Some(interviews) = update.interviews {
            self.interviews = interviews;
        }
        if let Some(offer_status) = &update.offer_status {
            self.offer_status = offer_status.clone();
        }
        if let Some(is_critical) = update.is_critical {
            self.is_critical = is_critical;
        }
        if let Some(function) = &update.function {
            self.function = non_blank(Some(function.as_str()));
        }
    }
}

/// Reject a title already used by another role.
///
/// `editing` is the id of the role being updated, which may keep its own
/// title. Comparison ignores surrounding whitespace but is case-sensitive,
/// matching how titles are joined elsewhere.
pub fn validate_unique_title(
    roles: &[Role],
    title: &str,
    editing: Option<DbId>,
) -> Result<(), CoreError> {
    let title = title.trim();
    let taken = roles
        .iter()
        .any(|r| r.title == title && Some(r.id) != editing);
    if taken {
        return Err(CoreError::Validation(format!(
            "A role titled '{title}' already exists"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    use crate::validation::validate_input;

    fn role(id: u128, title: &str, status: RoleStatus) -> Role {
        Role {
            id: DbId::from_u128(id),
            title: title.to_string(),
            ta_owner: "Maaz".to_string(),
            status,
            days_open: 10,
            pipeline_count: 1,
            interviews: 0,
            offer_status: String::new(),
            is_critical: false,
            function: None,
        }
    }

    #[test]
    fn status_serializes_display_label() {
        let json = serde_json::to_string(&RoleStatus::GoingSlow).unwrap();
        assert_eq!(json, "\"Going Slow\"");
        let parsed: RoleStatus = serde_json::from_str("\"Discussions\"").unwrap();
        assert_eq!(parsed, RoleStatus::Discussions);
    }

    #[test]
    fn status_order_follows_funnel() {
        let mut statuses = vec![RoleStatus::Closed, RoleStatus::Research, RoleStatus::Offer];
        statuses.sort();
        assert_eq!(
            statuses,
            vec![RoleStatus::Research, RoleStatus::Offer, RoleStatus::Closed]
        );
    }

    #[test]
    fn status_from_str_rejects_unknown() {
        assert_matches!("Paused".parse::<RoleStatus>(), Err(CoreError::Validation(_)));
        assert_eq!("Going Slow".parse::<RoleStatus>().unwrap(), RoleStatus::GoingSlow);
    }

    #[test]
    fn closed_roles_are_inactive() {
        assert!(role(1, "A", RoleStatus::Offer).is_active());
        assert!(!role(1, "A", RoleStatus::Closed).is_active());
    }

    #[test]
    fn function_label_defaults_to_unassigned() {
        let mut r = role(1, "A", RoleStatus::Research);
        assert_eq!(r.function_label(), "Unassigned");
        r.function = Some("Product".to_string());
        assert_eq!(r.function_label(), "Product");
    }

    #[test]
    fn blank_function_is_stored_as_none() {
        let input: CreateRole = serde_json::from_value(serde_json::json!({
            "title": "Sr. PM – AI/ML",
            "function": "  "
        }))
        .unwrap();
        let r = Role::from_create(DbId::nil(), &input);
        assert_eq!(r.function, None);
        assert_eq!(r.status, RoleStatus::Research);
    }

    #[test]
    fn update_with_empty_function_clears_it() {
        let mut r = role(1, "A", RoleStatus::Research);
        r.function = Some("Marketing".to_string());
        r.apply_update(&UpdateRole {
            function: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(r.function, None);
    }

    #[test]
    fn negative_counts_are_rejected() {
        let input: CreateRole = serde_json::from_value(serde_json::json!({
            "title": "Process Eng – US",
            "daysOpen": -1
        }))
        .unwrap();
        assert_matches!(validate_input(&input), Err(CoreError::Validation(_)));
    }

    #[test]
    fn unique_title_rejects_duplicate_of_other_role() {
        let roles = vec![role(1, "Exec Asst. to CEO", RoleStatus::Discussions)];
        assert!(validate_unique_title(&roles, "Exec Asst. to CEO ", None).is_err());
        assert!(validate_unique_title(&roles, "Exec Asst. to CFO", None).is_ok());
    }

    #[test]
    fn unique_title_allows_role_to_keep_its_title() {
        let roles = vec![role(1, "Exec Asst. to CEO", RoleStatus::Discussions)];
        assert!(
            validate_unique_title(&roles, "Exec Asst. to CEO", Some(DbId::from_u128(1))).is_ok()
        );
        assert!(
            validate_unique_title(&roles, "Exec Asst. to CEO", Some(DbId::from_u128(2))).is_err()
        );
    }
}
