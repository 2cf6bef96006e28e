use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

use courseforge_core::AppError;
use courseforge_domain::{UserDeleted, UserId};

use crate::dto::UserDeletedEventRequest;
use crate::error::ApiResult;
use crate::state::AppState;

/// Header carrying the shared token for host platform callbacks.
pub const SERVICE_TOKEN_HEADER: &str = "x-courseforge-service-token";

pub async fn user_deleted_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UserDeletedEventRequest>,
) -> ApiResult<StatusCode> {
    let token = headers
        .get(SERVICE_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if token != state.platform_service_token {
        return Err(AppError::Unauthorized("platform service token required".to_owned()).into());
    }

    let event = UserDeleted::new(UserId::from_uuid(payload.user_id));
    state.event_bus.publish_user_deleted(&event).await;

    Ok(StatusCode::ACCEPTED)
}
