use crate::error::ApiError;
use crate::extractors::multipart_with_actor::MultipartWithActor;
use crate::extractors::project_submission::{read_submission, CREATE_IMAGE_FIELD, UPDATE_IMAGE_FIELD};
use crate::extractors::CurrentActor;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_service::ProjectQuery;
use serde_json::json;

/// 项目列表（附带分页的类型列表）
/// GET /admin/projects
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> Result<Response, ApiError> {
    let projects = state.project_manager.list(&query).await?;
    let types = state.type_service.paginate(&query.list_options()).await?;
    Ok(Json(json!({ "projects": projects, "types": types })).into_response())
}

/// 新建页面数据
/// GET /admin/projects/create
pub async fn new_project_form(State(state): State<AppState>) -> Result<Response, ApiError> {
    let data = state.project_manager.create_form().await?;
    Ok(Json(data).into_response())
}

/// 创建项目
/// POST /admin/projects
pub async fn create_project(
    State(state): State<AppState>,
    MultipartWithActor { multipart, actor }: MultipartWithActor,
) -> Result<Response, ApiError> {
    let submission = read_submission(multipart, CREATE_IMAGE_FIELD).await?;
    let outcome = state.project_manager.create(&actor, submission).await?;
    Ok((StatusCode::CREATED, Json(outcome)).into_response())
}

/// 项目详情
/// GET /admin/projects/:id
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let details = state.project_manager.show(id).await?;
    Ok(Json(details).into_response())
}

/// 编辑页面数据
/// GET /admin/projects/:id/edit
pub async fn edit_project_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let data = state.project_manager.edit_form(id).await?;
    Ok(Json(data).into_response())
}

/// 更新项目
/// PUT/POST /admin/projects/:id
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    MultipartWithActor { multipart, actor }: MultipartWithActor,
) -> Result<Response, ApiError> {
    let existing = state.project_manager.find(id).await?;
    let submission = read_submission(multipart, UPDATE_IMAGE_FIELD).await?;
    let outcome = state.project_manager.update(&actor, &existing, submission).await?;
    Ok(Json(outcome).into_response())
}

/// 删除项目
/// DELETE /admin/projects/:id
pub async fn delete_project(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let existing = state.project_manager.find(id).await?;
    let outcome = state.project_manager.destroy(&actor, existing).await?;
    Ok(Json(outcome).into_response())
}
