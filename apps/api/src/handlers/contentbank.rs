use axum::Json;
use axum::extract::{Extension, Query, State};

use courseforge_domain::UserId;

use crate::dto::{ContentFileNodeResponse, ContentSearchQuery};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn search_contents_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<UserId>,
    Query(query): Query<ContentSearchQuery>,
) -> ApiResult<Json<Vec<ContentFileNodeResponse>>> {
    let nodes = state
        .content_search_service
        .search_contents(actor, query.q.as_str())
        .await?;

    Ok(Json(
        nodes.into_iter().map(ContentFileNodeResponse::from).collect(),
    ))
}
