use crate::error::ApiError;
use crate::extractors::CurrentActor;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_domain::TaxonomyForm;
use folio_service::PageQuery;

/// 技术列表
/// GET /admin/technologies
pub async fn list_technologies(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    let technologies = state.technology_service.paginate(&query.list_options()).await?;
    Ok(Json(technologies).into_response())
}

/// 创建技术
/// POST /admin/technologies
pub async fn create_technology(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Json(form): Json<TaxonomyForm>,
) -> Result<Response, ApiError> {
    let created = state.technology_service.create(&actor, form).await?;
    Ok((StatusCode::CREATED, Json(created)).into_response())
}

/// 删除技术
/// DELETE /admin/technologies/:id
pub async fn delete_technology(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    state.technology_service.delete(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
