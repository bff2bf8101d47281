use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use hiretrack_core::offer::{CreateOffer, UpdateOffer};
use hiretrack_core::types::DbId;
use hiretrack_core::validation::validate_input;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/offers
pub async fn list_offers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let offers = state.store.list_offers().await?;

    Ok(Json(DataResponse { data: offers }))
}

/// POST /api/v1/offers
pub async fn create_offer(
    State(state): State<AppState>,
    Json(input): Json<CreateOffer>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let offer = state.store.create_offer(&input).await?;
    tracing::info!(id = %offer.id, status = ?offer.status, "Offer created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: offer })))
}

/// PUT /api/v1/offers/{id}
pub async fn update_offer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOffer>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let offer = state.store.update_offer(id, &input).await?;
    tracing::info!(%id, status = ?offer.status, "Offer updated");

    Ok(Json(DataResponse { data: offer }))
}

/// DELETE /api/v1/offers/{id}
pub async fn delete_offer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.store.delete_offer(id).await?;
    tracing::info!(%id, "Offer deleted");

    Ok(StatusCode::NO_CONTENT)
}
