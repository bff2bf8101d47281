use std::sync::Arc;

use tokio::sync::RwLock;

use hiretrack_core::dashboard::DashboardState;
use hiretrack_db::store::RecruitmentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Remote or local store, chosen once at startup.
    pub store: Arc<dyn RecruitmentStore>,
    pub config: Arc<ServerConfig>,
    /// Filters and modal state of the single dashboard.
    pub dashboard: Arc<RwLock<DashboardState>>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecruitmentStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            dashboard: Arc::new(RwLock::new(DashboardState::default())),
        }
    }
}
