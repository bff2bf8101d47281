//! Hiring bottlenecks attached to a role by title.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Entity};
use crate::validation::not_blank;

/// Descriptions offered as one-click suggestions.
pub const COMMON_BOTTLENECKS: &[&str] = &[
    "Feedback delay from hiring managers",
    "Panel unavailable for critical roles",
    "Low sourcing for specialized positions",
    "Candidate drop-off during process",
    "Salary expectations mismatch",
    "Long notice periods",
    "Interview scheduling conflicts",
    "Slow decision making process",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bottleneck {
    pub id: DbId,
    pub description: String,
    pub role_title: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBottleneck {
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    #[validate(custom(function = "not_blank"))]
    pub role_title: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBottleneck {
    #[validate(custom(function = "not_blank"))]
    pub description: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub role_title: Option<String>,
}

impl Entity for Bottleneck {
    const NAME: &'static str = "Bottleneck";
    type Create = CreateBottleneck;
    type Update = UpdateBottleneck;

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: &CreateBottleneck) -> Self {
        Self {
            id,
            description: input.description.trim().to_string(),
            role_title: input.role_title.clone(),
        }
    }

    fn apply_update(&mut self, update: &UpdateBottleneck) {
        if let Some(description) = &update.description {
            self.description = description.trim().to_string();
        }
        if let Some(role_title) = &update.role_title {
            self.role_title = role_title.clone();
        }
    }
}
