use axum::routing::{get, put};
use axum::Router;

use crate::handlers::bottlenecks;
use crate::state::AppState;

/// Bottleneck routes mounted at `/bottlenecks`.
///
/// ```text
/// GET    /              -> list_bottlenecks
/// POST   /              -> create_bottleneck
/// GET    /suggestions   -> list_suggestions
/// PUT    /{id}          -> update_bottleneck
/// DELETE /{id}          -> delete_bottleneck
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(bottlenecks::list_bottlenecks).post(bottlenecks::create_bottleneck),
        )
        .route("/suggestions", get(bottlenecks::list_suggestions))
        .route(
            "/{id}",
            put(bottlenecks::update_bottleneck).delete(bottlenecks::delete_bottleneck),
        )
}
