use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use hiretrack_core::bottleneck::{CreateBottleneck, UpdateBottleneck, COMMON_BOTTLENECKS};
use hiretrack_core::types::DbId;
use hiretrack_core::validation::validate_input;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/bottlenecks
pub async fn list_bottlenecks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let bottlenecks = state.store.list_bottlenecks().await?;

    Ok(Json(DataResponse { data: bottlenecks }))
}

/// GET /api/v1/bottlenecks/suggestions
///
/// Common descriptions offered when adding a bottleneck.
pub async fn list_suggestions() -> impl IntoResponse {
    Json(DataResponse {
        data: COMMON_BOTTLENECKS,
    })
}

/// POST /api/v1/bottlenecks
pub async fn create_bottleneck(
    State(state): State<AppState>,
    Json(input): Json<CreateBottleneck>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let bottleneck = state.store.create_bottleneck(&input).await?;
    tracing::info!(id = %bottleneck.id, role = %bottleneck.role_title, "Bottleneck added");

    Ok((StatusCode::CREATED, Json(DataResponse { data: bottleneck })))
}

/// PUT /api/v1/bottlenecks/{id}
pub async fn update_bottleneck(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBottleneck>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let bottleneck = state.store.update_bottleneck(id, &input).await?;

    Ok(Json(DataResponse { data: bottleneck }))
}

/// DELETE /api/v1/bottlenecks/{id}
pub async fn delete_bottleneck(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.store.delete_bottleneck(id).await?;
    tracing::info!(%id, "Bottleneck deleted");

    Ok(StatusCode::NO_CONTENT)
}
