use axum::routing::get;
use axum::Router;

use crate::handlers::ta_owners;
use crate::state::AppState;

/// TA owner routes mounted at `/ta-owners`.
///
/// ```text
/// GET    /   -> list_ta_owners
/// PUT    /   -> replace_ta_owners
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(ta_owners::list_ta_owners).put(ta_owners::replace_ta_owners),
    )
}
