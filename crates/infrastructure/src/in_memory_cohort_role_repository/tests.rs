use courseforge_application::{CohortRoleRepository, NewCohortRoleAssignment};
use courseforge_domain::{CohortId, CohortRoleAssignmentId, RoleId, UserId};

use super::InMemoryCohortRoleRepository;

fn input_for(user_id: UserId) -> NewCohortRoleAssignment {
    NewCohortRoleAssignment {
        user_id,
        role_id: RoleId::new(),
        cohort_id: CohortId::new(),
    }
}

#[tokio::test]
async fn create_assigns_distinct_identities() {
    let repository = InMemoryCohortRoleRepository::new();
    let user = UserId::new();

    let first = repository.create(input_for(user)).await;
    let second = repository.create(input_for(user)).await;

    let (Ok(first), Ok(second)) = (first, second) else {
        panic!("create failed");
    };
    assert_ne!(first.id(), second.id());
}

#[tokio::test]
async fn list_for_user_filters_and_orders_by_id() {
    let repository = InMemoryCohortRoleRepository::new();
    let user = UserId::new();

    for input in [input_for(user), input_for(UserId::new()), input_for(user)] {
        let created = repository.create(input).await;
        assert!(created.is_ok());
    }

    let listed = repository.list_for_user(user).await;
    let Ok(listed) = listed else {
        panic!("listing failed");
    };

    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|assignment| assignment.user_id() == user));
    assert!(listed[0].id() <= listed[1].id());
}

#[tokio::test]
async fn delete_removes_the_record_and_count_tracks_it() {
    let repository = InMemoryCohortRoleRepository::new();

    let created = repository.create(input_for(UserId::new())).await;
    let Ok(created) = created else {
        panic!("create failed");
    };

    let count = repository.count().await;
    assert!(count.is_ok_and(|value| value == 1));

    let deleted = repository.delete(created.id()).await;
    assert!(deleted.is_ok());

    let count = repository.count().await;
    assert!(count.is_ok_and(|value| value == 0));
}

#[tokio::test]
async fn delete_of_unknown_id_is_an_error() {
    let repository = InMemoryCohortRoleRepository::new();

    let result = repository.delete(CohortRoleAssignmentId::new()).await;
    assert!(result.is_err());
}
