use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use courseforge_core::{AppError, AppResult};
use courseforge_domain::{
    CohortId, CohortRoleAssignment, CohortRoleAssignmentId, RoleId, UserId,
};
use tokio::sync::Mutex;

use super::CohortRoleService;
use crate::cohort_role_ports::{CohortRoleRepository, NewCohortRoleAssignment};

#[derive(Default)]
struct FakeCohortRoleRepository {
    records: Mutex<HashMap<CohortRoleAssignmentId, CohortRoleAssignment>>,
}

#[async_trait]
impl CohortRoleRepository for FakeCohortRoleRepository {
    async fn create(&self, input: NewCohortRoleAssignment) -> AppResult<CohortRoleAssignment> {
        let assignment = CohortRoleAssignment::from_parts(
            CohortRoleAssignmentId::new(),
            input.user_id,
            input.role_id,
            input.cohort_id,
            Utc::now(),
        );
        self.records
            .lock()
            .await
            .insert(assignment.id(), assignment.clone());
        Ok(assignment)
    }

    async fn list_for_user(&self, user_id: UserId) -> AppResult<Vec<CohortRoleAssignment>> {
        let records = self.records.lock().await;
        let mut listed: Vec<CohortRoleAssignment> = records
            .values()
            .filter(|assignment| assignment.user_id() == user_id)
            .cloned()
            .collect();
        listed.sort_by_key(CohortRoleAssignment::id);
        Ok(listed)
    }

    async fn list_all(&self) -> AppResult<Vec<CohortRoleAssignment>> {
        let records = self.records.lock().await;
        let mut listed: Vec<CohortRoleAssignment> = records.values().cloned().collect();
        listed.sort_by_key(CohortRoleAssignment::id);
        Ok(listed)
    }

    async fn delete(&self, id: CohortRoleAssignmentId) -> AppResult<()> {
        if self.records.lock().await.remove(&id).is_none() {
            return Err(AppError::NotFound(format!(
                "cohort role assignment '{id}' does not exist"
            )));
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.records.lock().await.len() as u64)
    }
}

fn service() -> CohortRoleService {
    CohortRoleService::new(Arc::new(FakeCohortRoleRepository::default()))
}

fn assignment_for(user_id: UserId) -> NewCohortRoleAssignment {
    NewCohortRoleAssignment {
        user_id,
        role_id: RoleId::new(),
        cohort_id: CohortId::new(),
    }
}

#[tokio::test]
async fn create_and_count_assignments() {
    let service = service();

    let first = service
        .create_cohort_role_assignment(assignment_for(UserId::new()))
        .await;
    let second = service
        .create_cohort_role_assignment(assignment_for(UserId::new()))
        .await;
    assert!(first.is_ok());
    assert!(second.is_ok());

    let count = service.count_cohort_role_assignments().await;
    assert!(count.is_ok_and(|value| value == 2));
}

#[tokio::test]
async fn delete_removes_one_record() {
    let service = service();

    let kept_user = UserId::new();
    let removed = service
        .create_cohort_role_assignment(assignment_for(UserId::new()))
        .await;
    let Ok(removed) = removed else {
        panic!("assignment creation failed");
    };
    let kept = service.create_cohort_role_assignment(assignment_for(kept_user)).await;
    assert!(kept.is_ok());

    let deleted = service.delete_cohort_role_assignment(removed.id()).await;
    assert!(deleted.is_ok());

    let count = service.count_cohort_role_assignments().await;
    assert!(count.is_ok_and(|value| value == 1));

    let remaining = service.list_cohort_role_assignments().await;
    assert!(
        remaining.is_ok_and(|records| records
            .iter()
            .all(|assignment| assignment.user_id() == kept_user))
    );
}

#[tokio::test]
async fn delete_of_missing_assignment_is_not_found() {
    let service = service();

    let result = service
        .delete_cohort_role_assignment(CohortRoleAssignmentId::new())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn list_for_user_returns_only_that_users_records_ordered_by_id() {
    let service = service();
    let user = UserId::new();
    let other = UserId::new();

    for input in [
        assignment_for(user),
        assignment_for(other),
        assignment_for(user),
    ] {
        let created = service.create_cohort_role_assignment(input).await;
        assert!(created.is_ok());
    }

    let listed = service.list_cohort_role_assignments_for_user(user).await;
    let Ok(listed) = listed else {
        panic!("listing failed");
    };

    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|assignment| assignment.user_id() == user));
    assert!(listed[0].id() <= listed[1].id());
}
