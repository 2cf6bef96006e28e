//! Request and response payloads for the plugin HTTP surface.

use chrono::{DateTime, Utc};
use courseforge_domain::{CohortRoleAssignment, ContentFileNode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Liveness payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Incoming payload for cohort role assignment creation.
#[derive(Debug, Deserialize)]
pub struct CreateCohortRoleAssignmentRequest {
    pub user_id: Uuid,
    pub role_id: Uuid,
    pub cohort_id: Uuid,
}

/// API representation of a cohort role assignment record.
#[derive(Debug, Serialize)]
pub struct CohortRoleAssignmentResponse {
    pub assignment_id: Uuid,
    pub user_id: Uuid,
    pub role_id: Uuid,
    pub cohort_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<CohortRoleAssignment> for CohortRoleAssignmentResponse {
    fn from(assignment: CohortRoleAssignment) -> Self {
        Self {
            assignment_id: assignment.id().as_uuid(),
            user_id: assignment.user_id().as_uuid(),
            role_id: assignment.role_id().as_uuid(),
            cohort_id: assignment.cohort_id().as_uuid(),
            created_at: assignment.created_at(),
        }
    }
}

/// Query parameters accepted by the assignment listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListCohortRoleAssignmentsQuery {
    pub user_id: Option<Uuid>,
}

/// Incoming payload for the host platform user deletion callback.
#[derive(Debug, Deserialize)]
pub struct UserDeletedEventRequest {
    pub user_id: Uuid,
}

/// Query parameters accepted by the content search endpoint.
#[derive(Debug, Deserialize)]
pub struct ContentSearchQuery {
    #[serde(default)]
    pub q: String,
}

/// API representation of a content file display node.
#[derive(Debug, Serialize)]
pub struct ContentFileNodeResponse {
    pub title: String,
    pub source_url: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub modified_at: DateTime<Utc>,
}

impl From<ContentFileNode> for ContentFileNodeResponse {
    fn from(node: ContentFileNode) -> Self {
        Self {
            title: node.title,
            source_url: node.source_url,
            mime_type: node.mime_type,
            size_bytes: node.size_bytes,
            modified_at: node.modified_at,
        }
    }
}
