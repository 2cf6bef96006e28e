use courseforge_application::{CohortRoleRepository, NewCohortRoleAssignment};
use courseforge_domain::{CohortId, RoleId, UserId};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use super::PostgresCohortRoleRepository;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for cohort role repository tests: {error}");
    }

    Some(pool)
}

fn input_for(user_id: UserId) -> NewCohortRoleAssignment {
    NewCohortRoleAssignment {
        user_id,
        role_id: RoleId::new(),
        cohort_id: CohortId::new(),
    }
}

#[tokio::test]
async fn create_list_and_delete_round_trip() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = PostgresCohortRoleRepository::new(pool);
    let user = UserId::new();
    let other = UserId::new();

    let count_before = repository.count().await;
    let Ok(count_before) = count_before else {
        panic!("count failed");
    };

    let first = repository.create(input_for(user)).await;
    let second = repository.create(input_for(user)).await;
    let third = repository.create(input_for(other)).await;
    let (Ok(first), Ok(second), Ok(third)) = (first, second, third) else {
        panic!("create failed");
    };

    let count_after = repository.count().await;
    assert!(count_after.is_ok_and(|value| value == count_before + 3));

    let listed = repository.list_for_user(user).await;
    let Ok(listed) = listed else {
        panic!("listing failed");
    };
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|assignment| assignment.user_id() == user));
    assert!(listed[0].id() <= listed[1].id());

    for assignment in [first, second, third] {
        let deleted = repository.delete(assignment.id()).await;
        assert!(deleted.is_ok());
    }

    let count_final = repository.count().await;
    assert!(count_final.is_ok_and(|value| value == count_before));
}

#[tokio::test]
async fn delete_of_unknown_id_is_not_found() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = PostgresCohortRoleRepository::new(pool);

    let result = repository
        .delete(courseforge_domain::CohortRoleAssignmentId::new())
        .await;
    assert!(result.is_err());
}
