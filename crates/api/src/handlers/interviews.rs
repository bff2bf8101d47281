use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use hiretrack_core::interview::{CreateInterview, UpdateInterview, SUGGESTED_PANEL_MEMBERS};
use hiretrack_core::types::DbId;
use hiretrack_core::validation::validate_input;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/interviews
pub async fn list_interviews(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let interviews = state.store.list_interviews().await?;

    Ok(Json(DataResponse { data: interviews }))
}

/// GET /api/v1/interviews/suggestions
pub async fn list_suggestions() -> impl IntoResponse {
    Json(DataResponse {
        data: SUGGESTED_PANEL_MEMBERS,
    })
}

/// POST /api/v1/interviews
pub async fn create_interview(
    State(state): State<AppState>,
    Json(input): Json<CreateInterview>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let interview = state.store.create_interview(&input).await?;
    tracing::info!(id = %interview.id, date = %interview.date, "Interview scheduled");

    Ok((StatusCode::CREATED, Json(DataResponse { data: interview })))
}

/// PUT /api/v1/interviews/{id}
pub async fn update_interview(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInterview>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let interview = state.store.update_interview(id, &input).await?;
    tracing::info!(%id, "Interview updated");

    Ok(Json(DataResponse { data: interview }))
}

/// DELETE /api/v1/interviews/{id}
pub async fn delete_interview(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.store.delete_interview(id).await?;
    tracing::info!(%id, "Interview deleted");

    Ok(StatusCode::NO_CONTENT)
}
