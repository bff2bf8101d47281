//! Handlers for the dashboard view and its UI state.
//!
//! The view is recomputed from the stores on every request; only the
//! filter and modal state live in [`AppState::dashboard`].

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use hiretrack_core::dashboard::{build_view, DashboardSnapshot, DashboardState, OpenModal};
use hiretrack_core::error::CoreError;
use hiretrack_core::metrics::find_role_by_title;
use hiretrack_db::store::RecruitmentStore;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectCriticalRole {
    pub title: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalRoleSelection {
    pub state: DashboardState,
    /// Section the UI should scroll to.
    pub scroll_to: &'static str,
}

async fn load_snapshot(store: &dyn RecruitmentStore) -> AppResult<DashboardSnapshot> {
    Ok(DashboardSnapshot {
        candidates: store.list_candidates().await?,
        roles: store.list_roles().await?,
        interviews: store.list_interviews().await?,
        bottlenecks: store.list_bottlenecks().await?,
        offers: store.list_offers().await?,
        attrition: store.list_attrition().await?,
        headcount: store.list_headcount().await?,
        ta_owners: store.list_ta_owners().await?,
    })
}

/// GET /api/v1/dashboard
pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let snapshot = load_snapshot(state.store.as_ref()).await?;
    let ui_state = state.dashboard.read().await.clone();
    let today = chrono::Local::now().date_naive();

    let view = build_view(snapshot, ui_state, state.store.notice(), today);

    Ok(Json(DataResponse { data: view }))
}

/// GET /api/v1/dashboard/state
pub async fn get_state(State(state): State<AppState>) -> impl IntoResponse {
    let ui_state = state.dashboard.read().await.clone();

    Json(DataResponse { data: ui_state })
}

/// PUT /api/v1/dashboard/state
///
/// Replace the filters and modal state wholesale.
pub async fn put_state(
    State(state): State<AppState>,
    Json(input): Json<DashboardState>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let mut ui_state = state.dashboard.write().await;
    *ui_state = input;
    tracing::debug!(filter = ?ui_state.filter, modal = ?ui_state.modal, "Dashboard state replaced");

    Ok(Json(DataResponse {
        data: ui_state.clone(),
    }))
}

/// POST /api/v1/dashboard/modal/open
///
/// Open a modal, creating when `editing` is absent. Replaces any modal
/// already open.
pub async fn open_modal(
    State(state): State<AppState>,
    Json(input): Json<OpenModal>,
) -> AppResult<impl IntoResponse> {
    let mut ui_state = state.dashboard.write().await;
    match input.editing {
        Some(id) => ui_state.open_edit(input.kind, id)?,
        None => ui_state.open_create(input.kind),
    }
    tracing::debug!(modal = ?ui_state.modal, "Modal opened");

    Ok(Json(DataResponse {
        data: ui_state.clone(),
    }))
}

/// POST /api/v1/dashboard/modal/close
pub async fn close_modal(State(state): State<AppState>) -> impl IntoResponse {
    let mut ui_state = state.dashboard.write().await;
    ui_state.close_modal();

    Json(DataResponse {
        data: ui_state.clone(),
    })
}

/// POST /api/v1/dashboard/role-filter/clear
///
/// Drop the role filter, keeping the stage filter.
pub async fn clear_role_filter(State(state): State<AppState>) -> impl IntoResponse {
    let mut ui_state = state.dashboard.write().await;
    ui_state.clear_role_filter();

    Json(DataResponse {
        data: ui_state.clone(),
    })
}

/// POST /api/v1/dashboard/critical-roles/select
///
/// Filter the candidate pipeline to a critical role and reset the stage
/// filter.
pub async fn select_critical_role(
    State(state): State<AppState>,
    Json(input): Json<SelectCriticalRole>,
) -> AppResult<impl IntoResponse> {
    let roles = state.store.list_roles().await?;
    let title = input.title.trim();
    match find_role_by_title(&roles, title) {
        Some(role) if role.is_critical => {}
        Some(_) => {
            return Err(CoreError::Validation(format!("Role '{title}' is not marked critical")).into())
        }
        None => return Err(CoreError::Validation(format!("Unknown role '{title}'")).into()),
    }

    let mut ui_state = state.dashboard.write().await;
    let scroll_to = ui_state.select_critical_role(title);

    Ok(Json(DataResponse {
        data: CriticalRoleSelection {
            state: ui_state.clone(),
            scroll_to,
        },
    }))
}
