use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use courseforge_application::{CohortRoleRepository, NewCohortRoleAssignment};
use courseforge_core::{AppError, AppResult};
use courseforge_domain::{CohortId, CohortRoleAssignment, CohortRoleAssignmentId, RoleId, UserId};

#[cfg(test)]
mod tests;

/// PostgreSQL-backed repository for the plugin-owned assignment table.
#[derive(Clone)]
pub struct PostgresCohortRoleRepository {
    pool: PgPool,
}

impl PostgresCohortRoleRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CohortRoleAssignmentRow {
    id: uuid::Uuid,
    user_id: uuid::Uuid,
    role_id: uuid::Uuid,
    cohort_id: uuid::Uuid,
    created_at: DateTime<Utc>,
}

impl From<CohortRoleAssignmentRow> for CohortRoleAssignment {
    fn from(row: CohortRoleAssignmentRow) -> Self {
        Self::from_parts(
            CohortRoleAssignmentId::from_uuid(row.id),
            UserId::from_uuid(row.user_id),
            RoleId::from_uuid(row.role_id),
            CohortId::from_uuid(row.cohort_id),
            row.created_at,
        )
    }
}

#[async_trait]
impl CohortRoleRepository for PostgresCohortRoleRepository {
    async fn create(&self, input: NewCohortRoleAssignment) -> AppResult<CohortRoleAssignment> {
        let row = sqlx::query_as::<_, CohortRoleAssignmentRow>(
            r#"
            INSERT INTO cohort_role_assignments (id, user_id, role_id, cohort_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, role_id, cohort_id, created_at
            "#,
        )
        .bind(CohortRoleAssignmentId::new().as_uuid())
        .bind(input.user_id.as_uuid())
        .bind(input.role_id.as_uuid())
        .bind(input.cohort_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to create cohort role assignment: {error}"))
        })?;

        Ok(row.into())
    }

    async fn list_for_user(&self, user_id: UserId) -> AppResult<Vec<CohortRoleAssignment>> {
        let rows = sqlx::query_as::<_, CohortRoleAssignmentRow>(
            r#"
            SELECT id, user_id, role_id, cohort_id, created_at
            FROM cohort_role_assignments
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to list cohort role assignments for user: {error}"
            ))
        })?;

        Ok(rows.into_iter().map(CohortRoleAssignment::from).collect())
    }

    async fn list_all(&self) -> AppResult<Vec<CohortRoleAssignment>> {
        let rows = sqlx::query_as::<_, CohortRoleAssignmentRow>(
            r#"
            SELECT id, user_id, role_id, cohort_id, created_at
            FROM cohort_role_assignments
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to list cohort role assignments: {error}"))
        })?;

        Ok(rows.into_iter().map(CohortRoleAssignment::from).collect())
    }

    async fn delete(&self, id: CohortRoleAssignmentId) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM cohort_role_assignments
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to delete cohort role assignment: {error}"))
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "cohort role assignment '{id}' does not exist"
            )));
        }

        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM cohort_role_assignments
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to count cohort role assignments: {error}"))
        })?;

        Ok(u64::try_from(count).unwrap_or(0))
    }
}
