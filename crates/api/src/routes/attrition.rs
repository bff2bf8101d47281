use axum::routing::{get, put};
use axum::Router;

use crate::handlers::attrition;
use crate::state::AppState;

/// Attrition routes mounted at `/attrition`.
///
/// ```text
/// GET    /       -> list_attrition
/// POST   /       -> create_attrition
/// PUT    /{id}   -> update_attrition
/// DELETE /{id}   -> delete_attrition
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(attrition::list_attrition).post(attrition::create_attrition),
        )
        .route(
            "/{id}",
            put(attrition::update_attrition).delete(attrition::delete_attrition),
        )
}
