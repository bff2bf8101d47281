//! Handlers for the candidate pipeline.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use hiretrack_core::candidate::{
    CreateCandidate, SetCandidateRating, UpdateCandidate, SUGGESTED_TAGS,
};
use hiretrack_core::dashboard::{filter_candidates, CandidateFilter};
use hiretrack_core::types::DbId;
use hiretrack_core::validation::validate_input;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Optional dropdown filters, using the same labels as the dashboard
/// (`All Roles`, `All Stages`, or a concrete value).
#[derive(Debug, Deserialize)]
pub struct CandidateListParams {
    pub role: Option<String>,
    pub stage: Option<String>,
}

/// GET /api/v1/candidates
pub async fn list_candidates(
    State(state): State<AppState>,
    Query(params): Query<CandidateListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = CandidateFilter::from_labels(params.role.as_deref(), params.stage.as_deref())?;
    let candidates = state.store.list_candidates().await?;

    Ok(Json(DataResponse {
        data: filter_candidates(&candidates, &filter),
    }))
}

/// GET /api/v1/candidates/suggestions
///
/// Tags offered by the candidate form.
pub async fn list_suggestions() -> impl IntoResponse {
    Json(DataResponse {
        data: SUGGESTED_TAGS,
    })
}

/// POST /api/v1/candidates
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(input): Json<CreateCandidate>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let candidate = state.store.create_candidate(&input).await?;
    tracing::info!(id = %candidate.id, role = %candidate.role, "Candidate created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: candidate })))
}

/// PUT /api/v1/candidates/{id}
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCandidate>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let candidate = state.store.update_candidate(id, &input).await?;
    tracing::info!(%id, "Candidate updated");

    Ok(Json(DataResponse { data: candidate }))
}

/// PUT /api/v1/candidates/{id}/rating
///
/// Set or clear (`"rating": null`) the star rating without touching any
/// other field.
pub async fn set_rating(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetCandidateRating>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let candidate = state.store.set_candidate_rating(id, input.rating).await?;
    tracing::debug!(%id, rating = ?input.rating, "Candidate rated");

    Ok(Json(DataResponse { data: candidate }))
}

/// DELETE /api/v1/candidates/{id}
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.store.delete_candidate(id).await?;
    tracing::info!(%id, "Candidate deleted");

    Ok(StatusCode::NO_CONTENT)
}
