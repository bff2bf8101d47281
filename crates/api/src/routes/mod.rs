pub mod attrition;
pub mod bottlenecks;
pub mod candidates;
pub mod dashboard;
pub mod headcount;
pub mod health;
pub mod interviews;
pub mod offers;
pub mod roles;
pub mod ta_owners;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /candidates                         list (?role, ?stage), create
/// /candidates/suggestions             suggested tags (GET)
/// /candidates/{id}                    update, delete
/// /candidates/{id}/rating             set or clear rating (PUT)
///
/// /roles                              list, create
/// /roles/suggestions                  suggested functions (GET)
/// /roles/{id}                         update, delete
///
/// /interviews                         list, create
/// /interviews/suggestions             suggested panel members (GET)
/// /interviews/{id}                    update, delete
///
/// /bottlenecks                        list, create
/// /bottlenecks/suggestions            common descriptions (GET)
/// /bottlenecks/{id}                   update, delete
///
/// /ta-owners                          list, replace (PUT)
///
/// /offers                             list, create
/// /offers/{id}                        update, delete
///
/// /attrition                          list, create
/// /attrition/{id}                     update, delete
///
/// /headcount                          list, create
/// /headcount/chart                    stacked bar chart (GET)
/// /headcount/{id}                     update, delete
///
/// /dashboard                          derived dashboard view (GET)
/// /dashboard/state                    UI state (GET, PUT)
/// /dashboard/modal/open               open a create or edit modal (POST)
/// /dashboard/modal/close              close the open modal (POST)
/// /dashboard/role-filter/clear        drop the role filter (POST)
/// /dashboard/critical-roles/select    select a critical role (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/candidates", candidates::router())
        .nest("/roles", roles::router())
        .nest("/interviews", interviews::router())
        .nest("/bottlenecks", bottlenecks::router())
        .nest("/ta-owners", ta_owners::router())
        .nest("/offers", offers::router())
        .nest("/attrition", attrition::router())
        .nest("/headcount", headcount::router())
        .nest("/dashboard", dashboard::router())
}
