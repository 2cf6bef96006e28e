use async_trait::async_trait;
use courseforge_core::AppResult;
use courseforge_domain::{CohortId, CohortRoleAssignment, CohortRoleAssignmentId, RoleId, UserId};

/// Input payload for recording a cohort role assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCohortRoleAssignment {
    /// User receiving the role.
    pub user_id: UserId,
    /// Role granted within the cohort.
    pub role_id: RoleId,
    /// Cohort the role applies to.
    pub cohort_id: CohortId,
}

/// Repository port for the plugin-owned cohort role assignment table.
#[async_trait]
pub trait CohortRoleRepository: Send + Sync {
    /// Persists a new assignment and returns the stored record.
    async fn create(&self, input: NewCohortRoleAssignment) -> AppResult<CohortRoleAssignment>;

    /// Lists the assignments recorded for a user, ordered by id.
    async fn list_for_user(&self, user_id: UserId) -> AppResult<Vec<CohortRoleAssignment>>;

    /// Lists every assignment, ordered by id.
    async fn list_all(&self) -> AppResult<Vec<CohortRoleAssignment>>;

    /// Deletes an assignment by id.
    ///
    /// Returns `AppError::NotFound` when no record has that id.
    async fn delete(&self, id: CohortRoleAssignmentId) -> AppResult<()>;

    /// Counts all recorded assignments.
    async fn count(&self) -> AppResult<u64>;
}
