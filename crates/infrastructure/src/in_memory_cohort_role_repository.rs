use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use courseforge_application::{CohortRoleRepository, NewCohortRoleAssignment};
use courseforge_core::{AppError, AppResult};
use courseforge_domain::{CohortRoleAssignment, CohortRoleAssignmentId, UserId};
use tokio::sync::RwLock;

#[cfg(test)]
mod tests;

/// In-memory cohort role repository for tests and local development.
#[derive(Debug, Default)]
pub struct InMemoryCohortRoleRepository {
    records: RwLock<HashMap<CohortRoleAssignmentId, CohortRoleAssignment>>,
}

impl InMemoryCohortRoleRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl CohortRoleRepository for InMemoryCohortRoleRepository {
    async fn create(&self, input: NewCohortRoleAssignment) -> AppResult<CohortRoleAssignment> {
        let assignment = CohortRoleAssignment::from_parts(
            CohortRoleAssignmentId::new(),
            input.user_id,
            input.role_id,
            input.cohort_id,
            Utc::now(),
        );

        self.records
            .write()
            .await
            .insert(assignment.id(), assignment.clone());

        Ok(assignment)
    }

    async fn list_for_user(&self, user_id: UserId) -> AppResult<Vec<CohortRoleAssignment>> {
        let records = self.records.read().await;

        let mut listed: Vec<CohortRoleAssignment> = records
            .values()
            .filter(|assignment| assignment.user_id() == user_id)
            .cloned()
            .collect();
        listed.sort_by_key(CohortRoleAssignment::id);

        Ok(listed)
    }

    async fn list_all(&self) -> AppResult<Vec<CohortRoleAssignment>> {
        let records = self.records.read().await;

        let mut listed: Vec<CohortRoleAssignment> = records.values().cloned().collect();
        listed.sort_by_key(CohortRoleAssignment::id);

        Ok(listed)
    }

    async fn delete(&self, id: CohortRoleAssignmentId) -> AppResult<()> {
        if self.records.write().await.remove(&id).is_none() {
            return Err(AppError::NotFound(format!(
                "cohort role assignment '{id}' does not exist"
            )));
        }

        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.records.read().await.len() as u64)
    }
}
