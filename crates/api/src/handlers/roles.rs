//! Handlers for open roles.
//!
//! Titles act as the join key for candidates, interviews and bottlenecks,
//! so they are checked for uniqueness before every write.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use hiretrack_core::role::{
    validate_unique_title, CreateRole, UpdateRole, SUGGESTED_FUNCTIONS,
};
use hiretrack_core::types::DbId;
use hiretrack_core::validation::validate_input;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/roles
pub async fn list_roles(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let roles = state.store.list_roles().await?;

    Ok(Json(DataResponse { data: roles }))
}

/// GET /api/v1/roles/suggestions
///
/// Functions offered by the role form.
pub async fn list_suggestions() -> impl IntoResponse {
    Json(DataResponse {
        data: SUGGESTED_FUNCTIONS,
    })
}

/// POST /api/v1/roles
pub async fn create_role(
    State(state): State<AppState>,
    Json(input): Json<CreateRole>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let existing = state.store.list_roles().await?;
    validate_unique_title(&existing, &input.title, None)?;

    let role = state.store.create_role(&input).await?;
    tracing::info!(id = %role.id, title = %role.title, "Role created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: role })))
}

/// PUT /api/v1/roles/{id}
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRole>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    if let Some(title) = &input.title {
        let existing = state.store.list_roles().await?;
        validate_unique_title(&existing, title, Some(id))?;
    }

    let role = state.store.update_role(id, &input).await?;
    tracing::info!(%id, title = %role.title, "Role updated");

    Ok(Json(DataResponse { data: role }))
}

/// DELETE /api/v1/roles/{id}
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.store.delete_role(id).await?;
    tracing::info!(%id, "Role deleted");

    Ok(StatusCode::NO_CONTENT)
}
