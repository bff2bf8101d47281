//! Dashboard UI state and the derived dashboard view.
//!
//! [`DashboardState`] holds what the UI would otherwise keep as loose
//! globals: the candidate filters, which modal is open and which record
//! it is editing. [`build_view`] derives everything the dashboard shows
//! from a snapshot of the stores plus that state.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::attrition::Attrition;
use crate::bottleneck::Bottleneck;
use crate::candidate::{Candidate, PipelineStage};
use crate::error::CoreError;
use crate::headcount::HeadcountRecord;
use crate::headcount_chart::{build_chart, HeadcountChart};
use crate::interview::Interview;
use crate::metrics::{self, MonthlyMetrics};
use crate::offer::Offer;
use crate::role::Role;
use crate::types::DbId;

pub const ALL_ROLES: &str = "All Roles";
pub const ALL_STAGES: &str = "All Stages";

/// Section scrolled to after selecting a critical role.
pub const CANDIDATE_PIPELINE_SECTION: &str = "candidate-pipeline";

// ---------------------------------------------------------------------------
// Candidate filter
// ---------------------------------------------------------------------------

/// Role and stage filter over the candidate list. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFilter {
    pub role: Option<String>,
    pub stage: Option<PipelineStage>,
}

impl CandidateFilter {
    /// Build a filter from dropdown labels, where `"All Roles"` and
    /// `"All Stages"` (or an absent value) select everything.
    pub fn from_labels(role: Option<&str>, stage: Option<&str>) -> Result<Self, CoreError> {
        let role = role
            .filter(|r| !r.is_empty() && *r != ALL_ROLES)
            .map(str::to_string);
        let stage = match stage {
            None | Some("") | Some(ALL_STAGES) => None,
            Some(label) => Some(label.parse::<PipelineStage>()?),
        };
        Ok(Self { role, stage })
    }

    pub fn matches(&self, candidate: &Candidate) -> bool {
        let role_match = self.role.as_ref().map_or(true, |r| candidate.role == *r);
        let stage_match = self.stage.map_or(true, |s| candidate.stage == s);
        role_match && stage_match
    }
}

pub fn filter_candidates(candidates: &[Candidate], filter: &CandidateFilter) -> Vec<Candidate> {
    candidates
        .iter()
        .filter(|c| filter.matches(c))
        .cloned()
        .collect()
}

/// `"All Roles"` followed by each distinct candidate role, first seen first.
pub fn role_filter_options(candidates: &[Candidate]) -> Vec<String> {
    let mut options = vec![ALL_ROLES.to_string()];
    for candidate in candidates {
        if !options[1..].contains(&candidate.role) {
            options.push(candidate.role.clone());
        }
    }
    options
}

/// `"All Stages"` followed by the funnel stages in order.
pub fn stage_filter_options() -> Vec<String> {
    std::iter::once(ALL_STAGES)
        .chain(PipelineStage::ALL.iter().map(PipelineStage::as_str))
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// UI state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModalKind {
    Candidate,
    Role,
    Interview,
    Bottleneck,
    TaOwners,
    Headcount,
}

impl ModalKind {
    /// Whether the modal edits a single record (and so may carry an id).
    pub fn edits_record(&self) -> bool {
        !matches!(self, Self::TaOwners)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenModal {
    pub kind: ModalKind,
    /// Record being edited; `None` when creating.
    pub editing: Option<DbId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub filter: CandidateFilter,
    /// At most one modal is open at a time.
    pub modal: Option<OpenModal>,
}

impl DashboardState {
    pub fn validate(&self) -> Result<(), CoreError> {
        match &self.modal {
            Some(OpenModal {
                kind,
                editing: Some(_),
            }) if !kind.edits_record() => Err(CoreError::Validation(format!(
                "The {kind:?} modal does not edit a single record"
            ))),
            _ => Ok(()),
        }
    }

    pub fn open_create(&mut self, kind: ModalKind) {
        self.modal = Some(OpenModal {
            kind,
            editing: None,
        });
    }

    pub fn open_edit(&mut self, kind: ModalKind, id: DbId) -> Result<(), CoreError> {
        let next = Self {
            modal: Some(OpenModal {
                kind,
                editing: Some(id),
            }),
            ..self.clone()
        };
        next.validate()?;
        *self = next;
        Ok(())
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Filter the candidate list to `title`, reset the stage filter and
    /// return the section to scroll to.
    pub fn select_critical_role(&mut self, title: &str) -> &'static str {
        self.filter = CandidateFilter {
            role: Some(title.to_string()),
            stage: None,
        };
        CANDIDATE_PIPELINE_SECTION
    }

    pub fn clear_role_filter(&mut self) {
        self.filter.role = None;
    }
}

// ---------------------------------------------------------------------------
// Derived view
// ---------------------------------------------------------------------------

/// Everything loaded from the stores that the dashboard is derived from.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub candidates: Vec<Candidate>,
    pub roles: Vec<Role>,
    pub interviews: Vec<Interview>,
    pub bottlenecks: Vec<Bottleneck>,
    pub offers: Vec<Offer>,
    pub attrition: Vec<Attrition>,
    pub headcount: Vec<HeadcountRecord>,
    pub ta_owners: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalRoleCard {
    pub role: Role,
    pub bottlenecks: Vec<Bottleneck>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub state: DashboardState,
    /// Informational banner, set when running on demo data.
    pub notice: Option<String>,
    pub active_roles: usize,
    pub interviews_scheduled: usize,
    pub monthly: MonthlyMetrics,
    pub active_roles_by_function: BTreeMap<String, usize>,
    pub critical_roles: Vec<CriticalRoleCard>,
    pub remaining_bottlenecks: Vec<Bottleneck>,
    pub role_filter_options: Vec<String>,
    pub stage_filter_options: Vec<String>,
    pub candidates: Vec<Candidate>,
    pub roles: Vec<Role>,
    pub interviews: Vec<Interview>,
    pub ta_owners: Vec<String>,
    pub headcount_chart: HeadcountChart,
}

pub fn build_view(
    snapshot: DashboardSnapshot,
    state: DashboardState,
    notice: Option<String>,
    today: NaiveDate,
) -> DashboardView {
    let critical_roles = metrics::critical_roles(&snapshot.roles)
        .into_iter()
        .map(|role| CriticalRoleCard {
            role: role.clone(),
            bottlenecks: metrics::bottlenecks_for_role(&snapshot.bottlenecks, &role.title)
                .into_iter()
                .cloned()
                .collect(),
        })
        .collect();
    let remaining_bottlenecks = metrics::remaining_bottlenecks(&snapshot.roles, &snapshot.bottlenecks)
        .into_iter()
        .cloned()
        .collect();

    DashboardView {
        notice,
        active_roles: metrics::active_role_count(&snapshot.roles),
        interviews_scheduled: snapshot.interviews.len(),
        monthly: metrics::current_month_metrics(&snapshot.offers, &snapshot.attrition, today),
        active_roles_by_function: metrics::active_roles_by_function(&snapshot.roles),
        critical_roles,
        remaining_bottlenecks,
        role_filter_options: role_filter_options(&snapshot.candidates),
        stage_filter_options: stage_filter_options(),
        candidates: filter_candidates(&snapshot.candidates, &state.filter),
        headcount_chart: build_chart(&snapshot.headcount),
        roles: snapshot.roles,
        interviews: snapshot.interviews,
        ta_owners: snapshot.ta_owners,
        state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    use crate::sample_data;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
    }

    #[test]
    fn all_labels_select_everything() {
        let filter = CandidateFilter::from_labels(Some(ALL_ROLES), Some(ALL_STAGES)).unwrap();
        assert_eq!(filter, CandidateFilter::default());
        let candidates = sample_data::candidates();
        assert_eq!(filter_candidates(&candidates, &filter).len(), candidates.len());
    }

    #[test]
    fn unknown_stage_label_is_rejected() {
        assert_matches!(
            CandidateFilter::from_labels(None, Some("Onsite")),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn role_and_stage_filters_combine() {
        let candidates = sample_data::candidates();
        let by_role = CandidateFilter::from_labels(Some("Sr. PM – AI/ML"), None).unwrap();
        let matched = filter_candidates(&candidates, &by_role);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Priya Sharma");

        let mismatched = CandidateFilter {
            role: Some("Sr. PM – AI/ML".to_string()),
            stage: Some(PipelineStage::L1Screen),
        };
        assert!(filter_candidates(&candidates, &mismatched).is_empty());
    }

    #[test]
    fn role_options_are_distinct_in_first_seen_order() {
        let options = role_filter_options(&sample_data::candidates());
        assert_eq!(
            options,
            vec![
                "All Roles",
                "App Engineer – East",
                "Sr. PM – AI/ML",
                "Exec Asst. to CEO"
            ]
        );
    }

    #[test]
    fn stage_options_list_funnel() {
        assert_eq!(
            stage_filter_options(),
            vec!["All Stages", "L1 Screen", "L2 Tech", "Final", "Offer Released"]
        );
    }

    #[test]
    fn selecting_critical_role_resets_stage_and_returns_section() {
        let mut state = DashboardState {
            filter: CandidateFilter {
                role: None,
                stage: Some(PipelineStage::Final),
            },
            modal: None,
        };
        let target = state.select_critical_role("Process Eng – US");
        assert_eq!(target, CANDIDATE_PIPELINE_SECTION);
        assert_eq!(state.filter.role.as_deref(), Some("Process Eng – US"));
        assert_eq!(state.filter.stage, None);

        state.clear_role_filter();
        assert_eq!(state.filter, CandidateFilter::default());
    }

    #[test]
    fn modal_open_and_close() {
        let mut state = DashboardState::default();
        state.open_create(ModalKind::Headcount);
        assert_eq!(state.modal.as_ref().unwrap().editing, None);

        let id = DbId::from_u128(3);
        state.open_edit(ModalKind::Role, id).unwrap();
        assert_eq!(
            state.modal,
            Some(OpenModal {
                kind: ModalKind::Role,
                editing: Some(id)
            })
        );

        assert!(state.open_edit(ModalKind::TaOwners, id).is_err());
        assert_eq!(state.modal.as_ref().unwrap().kind, ModalKind::Role);

        state.close_modal();
        assert_eq!(state.modal, None);
    }

    #[test]
    fn view_derives_counts_from_sample_data() {
        let snapshot = DashboardSnapshot {
            candidates: sample_data::candidates(),
            roles: sample_data::roles(),
            interviews: sample_data::interviews(),
            bottlenecks: sample_data::bottlenecks(),
            ..Default::default()
        };
        let view = build_view(snapshot, DashboardState::default(), None, today());

        assert_eq!(view.active_roles, 5);
        assert_eq!(view.interviews_scheduled, 3);
        assert_eq!(view.candidates.len(), 4);
        assert!(view.headcount_chart.bars.is_empty());
        assert_eq!(view.monthly, MonthlyMetrics::default());

        assert_eq!(view.critical_roles.len(), 3);
        assert!(view.critical_roles.iter().all(|c| c.bottlenecks.len() == 1));
        assert!(view.remaining_bottlenecks.is_empty());
        assert_eq!(view.active_roles_by_function.get("Engineering"), Some(&2));
    }
}
