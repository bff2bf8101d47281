use axum::routing::{get, put};
use axum::Router;

use crate::handlers::interviews;
use crate::state::AppState;

/// Interview routes mounted at `/interviews`.
///
/// ```text
/// GET    /              -> list_interviews
/// POST   /              -> create_interview
/// GET    /suggestions   -> list_suggestions
/// PUT    /{id}          -> update_interview
/// DELETE /{id}          -> delete_interview
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(interviews::list_interviews).post(interviews::create_interview),
        )
        .route("/suggestions", get(interviews::list_suggestions))
        .route(
            "/{id}",
            put(interviews::update_interview).delete(interviews::delete_interview),
        )
}
