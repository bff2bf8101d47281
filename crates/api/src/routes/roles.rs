use axum::routing::{get, put};
use axum::Router;

use crate::handlers::roles;
use crate::state::AppState;

/// Role routes mounted at `/roles`.
///
/// ```text
/// GET    /              -> list_roles
/// POST   /              -> create_role
/// GET    /suggestions   -> list_suggestions
/// PUT    /{id}          -> update_role
/// DELETE /{id}          -> delete_role
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(roles::list_roles).post(roles::create_role))
        .route("/suggestions", get(roles::list_suggestions))
        .route("/{id}", put(roles::update_role).delete(roles::delete_role))
}
