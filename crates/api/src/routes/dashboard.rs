use axum::routing::{get, post};
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard routes mounted at `/dashboard`.
///
/// ```text
/// GET    /                          -> get_dashboard
/// GET    /state                     -> get_state
/// PUT    /state                     -> put_state
/// POST   /modal/open                -> open_modal
/// POST   /modal/close               -> close_modal
/// POST   /role-filter/clear         -> clear_role_filter
/// POST   /critical-roles/select     -> select_critical_role
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::get_dashboard))
        .route("/state", get(dashboard::get_state).put(dashboard::put_state))
        .route("/modal/open", post(dashboard::open_modal))
        .route("/modal/close", post(dashboard::close_modal))
        .route("/role-filter/clear", post(dashboard::clear_role_filter))
        .route(
            "/critical-roles/select",
            post(dashboard::select_critical_role),
        )
}
