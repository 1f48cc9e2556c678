use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_service::ProjectError;
use serde_json::json;
use thiserror::Error;

/// HTTP层错误
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("Malformed form submission: {0}")]
    Multipart(#[from] MultipartError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Project(ProjectError::Validation(failure)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "message": failure.to_string(),
                    "errors": failure.errors,
                })),
            )
                .into_response(),
            ApiError::Project(ProjectError::NotFound(what)) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": format!("{} not found", what) })),
            )
                .into_response(),
            ApiError::Project(e) => {
                tracing::error!("Request failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "internal server error" })),
                )
                    .into_response()
            }
            ApiError::Multipart(e) => {
                let status = e.status();
                tracing::warn!("Rejected form submission: {}", e.body_text());
                (status, Json(json!({ "message": e.body_text() }))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::ValidationFailure;

    #[test]
    fn test_status_mapping() {
        let validation = ApiError::from(ProjectError::from(ValidationFailure::field("title", "must not be blank")));
        assert_eq!(validation.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);

        let missing = ApiError::from(ProjectError::not_found("project 1"));
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let storage = ApiError::from(ProjectError::Storage(folio_infra::StorageError::Backend("down".into())));
        assert_eq!(storage.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
