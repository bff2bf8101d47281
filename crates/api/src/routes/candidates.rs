use axum::routing::{get, put};
use axum::Router;

use crate::handlers::candidates;
use crate::state::AppState;

/// Candidate routes mounted at `/candidates`.
///
/// ```text
/// GET    /              -> list_candidates
/// POST   /              -> create_candidate
/// GET    /suggestions   -> list_suggestions
/// PUT    /{id}          -> update_candidate
/// DELETE /{id}          -> delete_candidate
/// PUT    /{id}/rating   -> set_rating
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(candidates::list_candidates).post(candidates::create_candidate),
        )
        .route("/suggestions", get(candidates::list_suggestions))
        .route(
            "/{id}",
            put(candidates::update_candidate).delete(candidates::delete_candidate),
        )
        .route("/{id}/rating", put(candidates::set_rating))
}
