use async_trait::async_trait;
use courseforge_core::AppResult;
use courseforge_domain::UserDeleted;

use crate::cohort_role_service::CohortRoleService;


/// Observer port for user deletion events from the platform dispatcher.
#[async_trait]
pub trait UserDeletedObserver: Send + Sync {
    /// Handles a user deletion event.
    async fn user_deleted(&self, event: &UserDeleted) -> AppResult<()>;
}

/// Removes a deleted user's cohort role assignments.
///
/// The platform keeps no referential integrity between user accounts and the
/// plugin-owned assignment table, so the records are cleaned up here when
/// the deletion event arrives.
pub struct CohortRoleCleanupObserver {
    cohort_roles: CohortRoleService,
}

impl CohortRoleCleanupObserver {
    /// Creates the observer on top of the cohort role service.
    #[must_use]
    pub fn new(cohort_roles: CohortRoleService) -> Self {
        Self { cohort_roles }
    }
}

#[async_trait]
impl UserDeletedObserver for CohortRoleCleanupObserver {
    async fn user_deleted(&self, event: &UserDeleted) -> AppResult<()> {
        let assignments = self
            .cohort_roles
            .list_cohort_role_assignments_for_user(event.user_id)
            .await?;

        for assignment in assignments {
            self.cohort_roles
                .delete_cohort_role_assignment(assignment.id())
                .await?;
        }

        Ok(())
    }
}
