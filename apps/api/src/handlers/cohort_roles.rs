use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;

use courseforge_application::NewCohortRoleAssignment;
use courseforge_core::AppError;
use courseforge_domain::{Capability, CohortId, CohortRoleAssignmentId, Context, RoleId, UserId};
use uuid::Uuid;

use crate::dto::{
    CohortRoleAssignmentResponse, CreateCohortRoleAssignmentRequest,
    ListCohortRoleAssignmentsQuery,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn create_cohort_role_assignment_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<UserId>,
    Json(payload): Json<CreateCohortRoleAssignmentRequest>,
) -> ApiResult<(StatusCode, Json<CohortRoleAssignmentResponse>)> {
    require_cohort_role_management(&state, actor).await?;

    let assignment = state
        .cohort_role_service
        .create_cohort_role_assignment(NewCohortRoleAssignment {
            user_id: UserId::from_uuid(payload.user_id),
            role_id: RoleId::from_uuid(payload.role_id),
            cohort_id: CohortId::from_uuid(payload.cohort_id),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CohortRoleAssignmentResponse::from(assignment)),
    ))
}

pub async fn delete_cohort_role_assignment_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<UserId>,
    Path(assignment_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    require_cohort_role_management(&state, actor).await?;

    state
        .cohort_role_service
        .delete_cohort_role_assignment(CohortRoleAssignmentId::from_uuid(assignment_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_cohort_role_assignments_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<UserId>,
    Query(query): Query<ListCohortRoleAssignmentsQuery>,
) -> ApiResult<Json<Vec<CohortRoleAssignmentResponse>>> {
    require_cohort_role_management(&state, actor).await?;

    let assignments = match query.user_id {
        Some(user_id) => {
            state
                .cohort_role_service
                .list_cohort_role_assignments_for_user(UserId::from_uuid(user_id))
                .await?
        }
        None => state.cohort_role_service.list_cohort_role_assignments().await?,
    };

    Ok(Json(
        assignments
            .into_iter()
            .map(CohortRoleAssignmentResponse::from)
            .collect(),
    ))
}

/// The administrative surface mirrors the platform requirement that cohort
/// role management is granted at the system context.
async fn require_cohort_role_management(state: &AppState, actor: UserId) -> Result<(), AppError> {
    let system_context = Context::system();
    let allowed = state
        .capability_checker
        .has_capability(actor, Capability::ManageCohortRoles, &system_context)
        .await?;

    if !allowed {
        return Err(AppError::Forbidden(
            "cohort role management capability required".to_owned(),
        ));
    }

    Ok(())
}
