use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use hiretrack_core::attrition::{CreateAttrition, UpdateAttrition};
use hiretrack_core::types::DbId;
use hiretrack_core::validation::validate_input;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/attrition
pub async fn list_attrition(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let exits = state.store.list_attrition().await?;

    Ok(Json(DataResponse { data: exits }))
}

/// POST /api/v1/attrition
pub async fn create_attrition(
    State(state): State<AppState>,
    Json(input): Json<CreateAttrition>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let exit = state.store.create_attrition(&input).await?;
    tracing::info!(id = %exit.id, exit_date = %exit.exit_date, "Exit recorded");

    Ok((StatusCode::CREATED, Json(DataResponse { data: exit })))
}

/// PUT /api/v1/attrition/{id}
pub async fn update_attrition(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAttrition>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let exit = state.store.update_attrition(id, &input).await?;

    Ok(Json(DataResponse { data: exit }))
}

/// DELETE /api/v1/attrition/{id}
pub async fn delete_attrition(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.store.delete_attrition(id).await?;
    tracing::info!(%id, "Exit record deleted");

    Ok(StatusCode::NO_CONTENT)
}
