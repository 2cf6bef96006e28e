use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use courseforge_core::AppError;
use courseforge_domain::UserId;
use uuid::Uuid;

use crate::error::ApiResult;

/// Header the host platform uses to convey the acting user.
pub const PLATFORM_USER_HEADER: &str = "x-courseforge-user-id";

pub async fn require_platform_user(mut request: Request, next: Next) -> ApiResult<Response> {
    let header = request
        .headers()
        .get(PLATFORM_USER_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("acting user header required".to_owned()))?;

    let user_id = parse_user_id(header)?;
    request.extensions_mut().insert(user_id);

    Ok(next.run(request).await)
}

fn parse_user_id(value: &str) -> Result<UserId, AppError> {
    Uuid::parse_str(value)
        .map(UserId::from_uuid)
        .map_err(|error| AppError::Unauthorized(format!("invalid acting user header: {error}")))
}

#[cfg(test)]
mod tests {
    use super::parse_user_id;

    #[test]
    fn well_formed_user_header_is_accepted() {
        let result = parse_user_id("6f2f9e5e-8d51-4c7b-9a83-8f6f1f2f4a10");
        assert!(result.is_ok());
    }

    #[test]
    fn malformed_user_header_is_rejected() {
        assert!(parse_user_id("not-a-uuid").is_err());
    }
}
