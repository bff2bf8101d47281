use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use hiretrack_db::store::StoreMode;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` on PostgreSQL, `degraded` while serving demo data.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub store: StoreMode,
    pub notice: Option<String>,
}

/// GET /health -- returns service status and which store is active.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store.mode();
    let status = match store {
        StoreMode::Remote => "ok",
        StoreMode::Local => "degraded",
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store,
        notice: state.store.notice(),
    })
}

/// Mount health check routes (root level, not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
