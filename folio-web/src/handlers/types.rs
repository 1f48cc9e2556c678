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

/// 类型列表
/// GET /admin/types
pub async fn list_types(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    let types = state.type_service.paginate(&query.list_options()).await?;
    Ok(Json(types).into_response())
}

/// 创建类型
/// POST /admin/types
pub async fn create_type(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Json(form): Json<TaxonomyForm>,
) -> Result<Response, ApiError> {
    let created = state.type_service.create(&actor, form).await?;
    Ok((StatusCode::CREATED, Json(created)).into_response())
}

/// 删除类型
/// DELETE /admin/types/:id
pub async fn delete_type(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    state.type_service.delete(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
