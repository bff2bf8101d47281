//! Candidates in the hiring pipeline.
//!
//! Experience and compensation are tagged unions: a number or a sentinel
//! label ("Fresher", "Confidential"). On the wire they serialize as either
//! a JSON number or that exact string. In storage the sentinel is written
//! as `0`, and a stored `0` reads back as the sentinel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{DbId, Entity};
use crate::validation::{dedup_trimmed, non_blank, not_blank};

/// Sentinel label for candidates without prior experience.
pub const FRESHER: &str = "Fresher";

/// Sentinel label for undisclosed compensation.
pub const CONFIDENTIAL: &str = "Confidential";

/// Tags offered by the candidate form. Any other value is accepted too.
pub const SUGGESTED_TAGS: &[&str] = &["Offer Released", "Offer Discussion", "Drop-off Risk"];

// ---------------------------------------------------------------------------
// Pipeline stage
// ---------------------------------------------------------------------------

/// A candidate's position in the hiring funnel, in funnel order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PipelineStage {
    #[default]
    #[serde(rename = "L1 Screen")]
    L1Screen,
    #[serde(rename = "L2 Tech")]
    L2Tech,
    #[serde(rename = "Final")]
    Final,
    #[serde(rename = "Offer Released")]
    OfferReleased,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 4] = [
        Self::L1Screen,
        Self::L2Tech,
        Self::Final,
        Self::OfferReleased,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L1Screen => "L1 Screen",
            Self::L2Tech => "L2 Tech",
            Self::Final => "Final",
            Self::OfferReleased => "Offer Released",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PipelineStage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid pipeline stage '{s}'. Must be one of: {}",
                    Self::ALL.map(|st| st.as_str()).join(", ")
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Experience
// ---------------------------------------------------------------------------

/// Years of experience, or the `Fresher` sentinel.
///
/// `Years` is never zero when built from the wire or from storage; a `0`
/// in either place is `Fresher`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "NumberOrLabel", into = "NumberOrLabel")]
pub enum Experience {
    #[default]
    Fresher,
    Years(u16),
}

impl Experience {
    /// Interpret a stored integer: `0` (or anything below) is `Fresher`.
    /// Values beyond `u16::MAX` cannot be written by this crate and read
    /// back as `u16::MAX`.
    pub fn from_stored(value: i32) -> Self {
        if value <= 0 {
            return Self::Fresher;
        }
        Self::Years(u16::try_from(value).unwrap_or(u16::MAX))
    }

    /// Value written to storage; `Fresher` is stored as `0`.
    pub fn to_stored(self) -> i32 {
        match self {
            Self::Fresher => 0,
            Self::Years(years) => i32::from(years),
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fresher => f.write_str(FRESHER),
            Self::Years(years) => write!(f, "{years} yrs"),
        }
    }
}

// ---------------------------------------------------------------------------
// Compensation
// ---------------------------------------------------------------------------

/// Annual compensation in lakhs (LPA), or the `Confidential` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "NumberOrLabel", into = "NumberOrLabel")]
pub enum Compensation {
    #[default]
    Confidential,
    Amount(f64),
}

impl Compensation {
    /// Interpret a stored value: `0` and `NULL` both mean `Confidential`.
    pub fn from_stored(value: Option<f64>) -> Self {
        match value {
            Some(amount) if amount != 0.0 => Self::Amount(amount),
            _ => Self::Confidential,
        }
    }

    /// Value written to storage; `Confidential` is stored as `0`.
    pub fn to_stored(self) -> f64 {
        match self {
            Self::Confidential => 0.0,
            Self::Amount(amount) => amount,
        }
    }
}

impl fmt::Display for Compensation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confidential => f.write_str(CONFIDENTIAL),
            Self::Amount(amount) => write!(f, "₹{amount} LPA"),
        }
    }
}

/// Wire shape shared by [`Experience`] and [`Compensation`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum NumberOrLabel {
    Number(f64),
    Label(String),
}

impl TryFrom<NumberOrLabel> for Experience {
    type Error = String;

    fn try_from(value: NumberOrLabel) -> Result<Self, Self::Error> {
        match value {
            NumberOrLabel::Label(label) if label == FRESHER => Ok(Self::Fresher),
            NumberOrLabel::Label(label) => Err(format!(
                "experience must be a whole number of years or \"{FRESHER}\", got \"{label}\""
            )),
            NumberOrLabel::Number(n) if n == 0.0 => Ok(Self::Fresher),
            NumberOrLabel::Number(n)
                if n > 0.0 && n.fract() == 0.0 && n <= f64::from(u16::MAX) =>
            {
                Ok(Self::Years(n as u16))
            }
            NumberOrLabel::Number(n) => Err(format!(
                "experience must be a whole number of years between 0 and {}, got {n}",
                u16::MAX
            )),
        }
    }
}

impl From<Experience> for NumberOrLabel {
    fn from(value: Experience) -> Self {
        match value {
            Experience::Fresher => Self::Label(FRESHER.to_string()),
            Experience::Years(years) => Self::Number(f64::from(years)),
        }
    }
}

impl TryFrom<NumberOrLabel> for Compensation {
    type Error = String;

    fn try_from(value: NumberOrLabel) -> Result<Self, Self::Error> {
        match value {
            NumberOrLabel::Label(label) if label == CONFIDENTIAL => Ok(Self::Confidential),
            NumberOrLabel::Label(label) => Err(format!(
                "compensation must be a number or \"{CONFIDENTIAL}\", got \"{label}\""
            )),
            NumberOrLabel::Number(n) if n == 0.0 => Ok(Self::Confidential),
            NumberOrLabel::Number(n) if n.is_finite() && n > 0.0 => Ok(Self::Amount(n)),
            NumberOrLabel::Number(n) => Err(format!(
                "compensation must be a non-negative number, got {n}"
            )),
        }
    }
}

impl From<Compensation> for NumberOrLabel {
    fn from(value: Compensation) -> Self {
        match value {
            Compensation::Confidential => Self::Label(CONFIDENTIAL.to_string()),
            Compensation::Amount(amount) => Self::Number(amount),
        }
    }
}

// ---------------------------------------------------------------------------
// Entity and DTOs
// ---------------------------------------------------------------------------

/// A candidate in the pipeline. `role` references a role by title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: DbId,
    pub name: String,
    pub photo: Option<String>,
    pub company: String,
    pub designation: String,
    pub experience: Experience,
    pub notice_period: String,
    #[serde(rename = "currentCTC")]
    pub current_ctc: Compensation,
    #[serde(rename = "expectedCTC")]
    pub expected_ctc: Compensation,
    pub role: String,
    pub stage: PipelineStage,
    pub notes: String,
    pub tags: Vec<String>,
    pub rating: Option<u8>,
}

/// DTO for creating a candidate.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCandidate {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    pub photo: Option<String>,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub experience: Experience,
    #[serde(default)]
    pub notice_period: String,
    #[serde(default, rename = "currentCTC")]
    pub current_ctc: Compensation,
    #[serde(default, rename = "expectedCTC")]
    pub expected_ctc: Compensation,
    #[validate(custom(function = "not_blank"))]
    pub role: String,
    #[serde(default)]
    pub stage: PipelineStage,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<u8>,
}

/// DTO for updating a candidate. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCandidate {
    #[validate(custom(function = "not_blank"))]
    pub name: Option<String>,
    pub photo: Option<String>,
    pub company: Option<String>,
    pub designation: Option<String>,
    pub experience: Option<Experience>,
    pub notice_period: Option<String>,
    #[serde(rename = "currentCTC")]
    pub current_ctc: Option<Compensation>,
    #[serde(rename = "expectedCTC")]
    pub expected_ctc: Option<Compensation>,
    #[validate(custom(function = "not_blank"))]
    pub role: Option<String>,
    pub stage: Option<PipelineStage>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<u8>,
}

/// DTO for setting or clearing a candidate's star rating.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetCandidateRating {
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<u8>,
}

impl Entity for Candidate {
    const NAME: &'static str = "Candidate";
    type Create = CreateCandidate;
    type Update = UpdateCandidate;

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: &CreateCandidate) -> Self {
        Self {
            id,
            name: input.name.trim().to_string(),
            photo: non_blank(input.photo.as_deref()),
            company: input.company.clone(),
            designation: input.designation.clone(),
            experience: input.experience,
            notice_period: input.notice_period.clone(),
            current_ctc: input.current_ctc,
            expected_ctc: input.expected_ctc,
            role: input.role.clone(),
            stage: input.stage,
            notes: input.notes.clone(),
            tags: dedup_trimmed(&input.tags),
            rating: input.rating,
        }
    }

    fn apply_update(&mut self, update: &UpdateCandidate) {
        if let Some(name) = &update.name {
            self.name = name.trim().to_string();
        }
        if let Some(photo) = &update.photo {
            self.photo = non_blank(Some(photo.as_str()));
        }
        if let Some(company) = &update.company {
            self.company = company.clone();
        }
        if let Some(designation) = &update.designation {
            self.designation = designation.clone();
        }
        if let Some(experience) = update.experience {
            self.experience = experience;
        }
        if let Some(notice_period) = &update.notice_period {
            self.notice_period = notice_period.clone();
        }
        if let Some(ctc) = update.current_ctc {
            self.current_ctc = ctc;
        }
        if let Some(ctc) = update.expected_ctc {
            self.expected_ctc = ctc;
        }
        if let Some(role) = &update.role {
            self.role = role.clone();
        }
        if let Some(stage) = update.stage {
            self.stage = stage;
        }
        if let Some(notes) = &update.notes {
            self.notes = notes.clone();
        }
        if let Some(tags) = &update.tags {
            self.tags = dedup_trimmed(tags);
        }
        if update.rating.is_some() {
            self.rating = update.rating;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    use crate::validation::validate_input;

    fn create_input() -> CreateCandidate {
        CreateCandidate {
            name: "Arjun Mehta".to_string(),
            photo: None,
            company: "StartupXYZ".to_string(),
            designation: "Full Stack Developer".to_string(),
            experience: Experience::Fresher,
            notice_period: "1 month".to_string(),
            current_ctc: Compensation::Confidential,
            expected_ctc: Compensation::Amount(18.0),
            role: "App Engineer – East".to_string(),
            stage: PipelineStage::L1Screen,
            notes: String::new(),
            tags: vec!["Drop-off Risk".to_string(), "Drop-off Risk".to_string()],
            rating: None,
        }
    }

    // -- Stored sentinel convention ---------------------------------------

    #[test]
    fn stored_zero_ctc_reads_as_confidential() {
        assert_eq!(Compensation::from_stored(Some(0.0)), Compensation::Confidential);
        assert_eq!(Compensation::from_stored(None), Compensation::Confidential);
        assert_eq!(Compensation::from_stored(Some(18.5)), Compensation::Amount(18.5));
    }

    #[test]
    fn confidential_ctc_is_stored_as_zero() {
        assert_eq!(Compensation::Confidential.to_stored(), 0.0);
        assert_eq!(Compensation::Amount(25.0).to_stored(), 25.0);
    }

    #[test]
    fn stored_zero_experience_reads_as_fresher() {
        assert_eq!(Experience::from_stored(0), Experience::Fresher);
        assert_eq!(Experience::from_stored(-3), Experience::Fresher);
        assert_eq!(Experience::from_stored(5), Experience::Years(5));
        assert_eq!(Experience::Fresher.to_stored(), 0);
        assert_eq!(Experience::Years(8).to_stored(), 8);
    }

    // -- Wire representation ----------------------------------------------

    #[test]
    fn compensation_serializes_as_number_or_label() {
        assert_eq!(
            serde_json::to_value(Compensation::Amount(32.0)).unwrap(),
            serde_json::json!(32.0)
        );
        assert_eq!(
            serde_json::to_value(Compensation::Confidential).unwrap(),
            serde_json::json!("Confidential")
        );
    }

    #[test]
    fn experience_deserializes_number_and_sentinel() {
        let years: Experience = serde_json::from_value(serde_json::json!(5)).unwrap();
        assert_eq!(years, Experience::Years(5));
        let fresher: Experience = serde_json::from_value(serde_json::json!("Fresher")).unwrap();
        assert_eq!(fresher, Experience::Fresher);
    }

    #[test]
    fn experience_rejects_unknown_label_and_fractions() {
        assert!(serde_json::from_value::<Experience>(serde_json::json!("Senior")).is_err());
        assert!(serde_json::from_value::<Experience>(serde_json::json!(2.5)).is_err());
    }

    #[test]
    fn zero_on_the_wire_reads_as_sentinel() {
        let experience: Experience = serde_json::from_value(serde_json::json!(0)).unwrap();
        assert_eq!(experience, Experience::Fresher);
        let ctc: Compensation = serde_json::from_value(serde_json::json!(0.0)).unwrap();
        assert_eq!(ctc, Compensation::Confidential);
    }

    #[test]
    fn experience_beyond_storable_range_is_rejected() {
        let max = serde_json::json!(u16::MAX);
        assert_eq!(
            serde_json::from_value::<Experience>(max).unwrap().to_stored(),
            i32::from(u16::MAX)
        );
        assert!(serde_json::from_value::<Experience>(serde_json::json!(70_000)).is_err());
        assert!(serde_json::from_value::<Experience>(serde_json::json!(-1)).is_err());
    }

    #[test]
    fn compensation_rejects_negative() {
        assert!(serde_json::from_value::<Compensation>(serde_json::json!(-1)).is_err());
    }

    #[test]
    fn candidate_uses_ctc_field_names() {
        let candidate = Candidate::from_create(DbId::nil(), &create_input());
        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["currentCTC"], "Confidential");
        assert_eq!(json["expectedCTC"], 18.0);
        assert_eq!(json["noticePeriod"], "1 month");
        assert_eq!(json["stage"], "L1 Screen");
    }

    #[test]
    fn pipeline_stage_parses_display_labels() {
        assert_eq!("L2 Tech".parse::<PipelineStage>().unwrap(), PipelineStage::L2Tech);
        assert_matches!("Onsite".parse::<PipelineStage>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn pipeline_stages_are_in_funnel_order() {
        assert!(PipelineStage::L1Screen < PipelineStage::L2Tech);
        assert!(PipelineStage::Final < PipelineStage::OfferReleased);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Experience::Years(5).to_string(), "5 yrs");
        assert_eq!(Compensation::Amount(18.0).to_string(), "₹18 LPA");
        assert_eq!(Compensation::Confidential.to_string(), "Confidential");
    }

    // -- Validation and patching ------------------------------------------

    #[test]
    fn create_requires_name_and_role() {
        let mut input = create_input();
        input.name = "  ".to_string();
        assert_matches!(validate_input(&input), Err(CoreError::Validation(_)));

        let mut input = create_input();
        input.role = String::new();
        assert_matches!(validate_input(&input), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rating_must_be_one_to_five() {
        let mut input = create_input();
        input.rating = Some(6);
        assert!(validate_input(&input).is_err());
        input.rating = Some(5);
        assert!(validate_input(&input).is_ok());
        assert!(validate_input(&SetCandidateRating { rating: Some(0) }).is_err());
        assert!(validate_input(&SetCandidateRating { rating: None }).is_ok());
    }

    #[test]
    fn from_create_dedups_tags() {
        let candidate = Candidate::from_create(DbId::nil(), &create_input());
        assert_eq!(candidate.tags, vec!["Drop-off Risk"]);
    }

    #[test]
    fn apply_update_only_touches_given_fields() {
        let mut candidate = Candidate::from_create(DbId::nil(), &create_input());
        candidate.apply_update(&UpdateCandidate {
            stage: Some(PipelineStage::Final),
            current_ctc: Some(Compensation::Amount(12.0)),
            ..Default::default()
        });
        assert_eq!(candidate.stage, PipelineStage::Final);
        assert_eq!(candidate.current_ctc, Compensation::Amount(12.0));
        assert_eq!(candidate.name, "Arjun Mehta");
        assert_eq!(candidate.experience, Experience::Fresher);
    }
}
