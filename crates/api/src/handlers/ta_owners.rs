use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use hiretrack_core::ta_owner::{normalize_owner_list, ReplaceTaOwners};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/ta-owners
pub async fn list_ta_owners(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let owners = state.store.list_ta_owners().await?;

    Ok(Json(DataResponse { data: owners }))
}

/// PUT /api/v1/ta-owners
///
/// Replace the whole list. Names are trimmed, blanks and duplicates dropped.
pub async fn replace_ta_owners(
    State(state): State<AppState>,
    Json(input): Json<ReplaceTaOwners>,
) -> AppResult<impl IntoResponse> {
    let owners = normalize_owner_list(&input.owners);

    let saved = state.store.replace_ta_owners(&owners).await?;
    tracing::info!(count = saved.len(), "TA owners replaced");

    Ok(Json(DataResponse { data: saved }))
}
