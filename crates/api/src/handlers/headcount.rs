//! Handlers for monthly headcount records and the stacked bar chart.
//!
//! A month may hold only one record. `Mar'25` and `March'25` count as the
//! same month.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use hiretrack_core::headcount::{validate_month_available, CreateHeadcount, UpdateHeadcount};
use hiretrack_core::headcount_chart::build_chart;
use hiretrack_core::types::DbId;
use hiretrack_core::validation::validate_input;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/headcount
pub async fn list_headcount(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = state.store.list_headcount().await?;

    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/headcount/chart
///
/// Deduplicated, chronologically sorted bars with segment heights and
/// label offsets already computed.
pub async fn get_chart(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = state.store.list_headcount().await?;

    Ok(Json(DataResponse {
        data: build_chart(&records),
    }))
}

/// POST /api/v1/headcount
pub async fn create_headcount(
    State(state): State<AppState>,
    Json(input): Json<CreateHeadcount>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let existing = state.store.list_headcount().await?;
    validate_month_available(&existing, &input.month, None)?;

    let record = state.store.create_headcount(&input).await?;
    tracing::info!(id = %record.id, month = %record.month, "Headcount record created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /api/v1/headcount/{id}
pub async fn update_headcount(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHeadcount>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    if let Some(month) = &input.month {
        let existing = state.store.list_headcount().await?;
        validate_month_available(&existing, month, Some(id))?;
    }

    let record = state.store.update_headcount(id, &input).await?;
    tracing::info!(%id, month = %record.month, "Headcount record updated");

    Ok(Json(DataResponse { data: record }))
}

/// DELETE /api/v1/headcount/{id}
pub async fn delete_headcount(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.store.delete_headcount(id).await?;
    tracing::info!(%id, "Headcount record deleted");

    Ok(StatusCode::NO_CONTENT)
}
