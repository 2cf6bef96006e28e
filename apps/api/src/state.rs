use std::sync::Arc;

use courseforge_application::{CapabilityChecker, CohortRoleService, ContentSearchService};
use courseforge_infrastructure::InProcessEventBus;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub cohort_role_service: CohortRoleService,
    pub content_search_service: ContentSearchService,
    pub capability_checker: Arc<dyn CapabilityChecker>,
    pub event_bus: Arc<InProcessEventBus>,
    pub platform_service_token: String,
}
