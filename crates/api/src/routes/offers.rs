use axum::routing::{get, put};
use axum::Router;

use crate::handlers::offers;
use crate::state::AppState;

/// Offer routes mounted at `/offers`.
///
/// ```text
/// GET    /       -> list_offers
/// POST   /       -> create_offer
/// PUT    /{id}   -> update_offer
/// DELETE /{id}   -> delete_offer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(offers::list_offers).post(offers::create_offer))
        .route("/{id}", put(offers::update_offer).delete(offers::delete_offer))
}
