use axum::routing::{get, put};
use axum::Router;

use crate::handlers::headcount;
use crate::state::AppState;

/// Headcount routes mounted at `/headcount`.
///
/// ```text
/// GET    /        -> list_headcount
/// POST   /        -> create_headcount
/// GET    /chart   -> get_chart
/// PUT    /{id}    -> update_headcount
/// DELETE /{id}    -> delete_headcount
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(headcount::list_headcount).post(headcount::create_headcount),
        )
        .route("/chart", get(headcount::get_chart))
        .route(
            "/{id}",
            put(headcount::update_headcount).delete(headcount::delete_headcount),
        )
}
