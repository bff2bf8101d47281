//! Scheduled interviews.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{DbId, Entity};
use crate::validation::{dedup_trimmed, not_blank};

/// Panel members offered by the interview form.
pub const SUGGESTED_PANEL_MEMBERS: &[&str] = &[
    "Yogiraj",
    "Shambhavi",
    "Maaz",
    "Ishita",
    "Priya",
    "Rahul",
    "Tech Lead",
    "Senior Engineer",
    "CEO",
    "CTO",
    "HR Manager",
    "Ravi Kumar",
];

/// Interview round: the first three funnel stages plus an HR round.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum InterviewStage {
    #[default]
    #[serde(rename = "L1 Screen")]
    L1Screen,
    #[serde(rename = "L2 Tech")]
    L2Tech,
    #[serde(rename = "Final")]
    Final,
    #[serde(rename = "HR Round")]
    HrRound,
}

impl InterviewStage {
    pub const ALL: [InterviewStage; 4] = [Self::L1Screen, Self::L2Tech, Self::Final, Self::HrRound];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L1Screen => "L1 Screen",
            Self::L2Tech => "L2 Tech",
            Self::Final => "Final",
            Self::HrRound => "HR Round",
        }
    }
}

impl fmt::Display for InterviewStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewStage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid interview stage '{s}'. Must be one of: {}",
                    Self::ALL.map(|st| st.as_str()).join(", ")
                ))
            })
    }
}

/// An interview of a candidate for a role, both referenced by name/title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: DbId,
    pub candidate_name: String,
    pub stage: InterviewStage,
    pub date: NaiveDate,
    /// Panel member names, trimmed and without duplicates.
    pub panel: Vec<String>,
    pub role_title: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterview {
    #[validate(custom(function = "not_blank"))]
    pub candidate_name: String,
    #[serde(default)]
    pub stage: InterviewStage,
    pub date: NaiveDate,
    #[serde(default)]
    pub panel: Vec<String>,
    #[validate(custom(function = "not_blank"))]
    pub role_title: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterview {
    #[validate(custom(function = "not_blank"))]
    pub candidate_name: Option<String>,
    pub stage: Option<InterviewStage>,
    pub date: Option<NaiveDate>,
    pub panel: Option<Vec<String>>,
    #[validate(custom(function = "not_blank"))]
    pub role_title: Option<String>,
}

impl Entity for Interview {
    const NAME: &'static str = "Interview";
    type Create = CreateInterview;
    type Update = UpdateInterview;

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: &CreateInterview) -> Self {
        Self {
            id,
            candidate_name: input.candidate_name.trim().to_string(),
            stage: input.stage,
            date: input.date,
            panel: dedup_trimmed(&input.panel),
            role_title: input.role_title.clone(),
        }
    }

    fn apply_update(&mut self, update: &UpdateInterview) {
        if let Some(candidate_name) = &update.candidate_name {
            self.candidate_name = candidate_name.trim().to_string();
        }
        if let Some(stage) = update.stage {
            self.stage = stage;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(panel) = &update.panel {
            self.panel = dedup_trimmed(panel);
        }
        if let Some(role_title) = &update.role_title {
            self.role_title = role_title.clone();
        }
    }
}
