use std::sync::Arc;

use courseforge_core::AppResult;
use courseforge_domain::{CohortRoleAssignment, CohortRoleAssignmentId, UserId};

use crate::cohort_role_ports::{CohortRoleRepository, NewCohortRoleAssignment};

#[cfg(test)]
mod tests;

/// Administrative service for cohort role assignment records.
///
/// Capability enforcement for the exposed surface happens at the API layer;
/// these operations are also invoked by the platform itself (for example the
/// user deletion observer) and therefore perform no checks of their own.
#[derive(Clone)]
pub struct CohortRoleService {
    repository: Arc<dyn CohortRoleRepository>,
}

impl CohortRoleService {
    /// Creates the service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn CohortRoleRepository>) -> Self {
        Self { repository }
    }

    /// Records a role assignment for a user within a cohort.
    pub async fn create_cohort_role_assignment(
        &self,
        input: NewCohortRoleAssignment,
    ) -> AppResult<CohortRoleAssignment> {
        self.repository.create(input).await
    }

    /// Deletes a cohort role assignment by id.
    pub async fn delete_cohort_role_assignment(
        &self,
        id: CohortRoleAssignmentId,
    ) -> AppResult<()> {
        self.repository.delete(id).await
    }

    /// Counts every recorded cohort role assignment.
    pub async fn count_cohort_role_assignments(&self) -> AppResult<u64> {
        self.repository.count().await
    }

    /// Lists the assignments recorded for a single user, ordered by id.
    pub async fn list_cohort_role_assignments_for_user(
        &self,
        user_id: UserId,
    ) -> AppResult<Vec<CohortRoleAssignment>> {
        self.repository.list_for_user(user_id).await
    }

    /// Lists every recorded assignment, ordered by id.
    pub async fn list_cohort_role_assignments(&self) -> AppResult<Vec<CohortRoleAssignment>> {
        self.repository.list_all().await
    }
}
