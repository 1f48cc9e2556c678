use folio_domain::ValidationFailure;
use folio_infra::StorageError;
use sea_orm::DbErr;
use thiserror::Error;

/// 项目管理操作的错误
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for ProjectError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(what) => ProjectError::NotFound(what),
            other => ProjectError::Database(other),
        }
    }
}

impl ProjectError {
    pub fn not_found(what: impl Into<String>) -> Self {
        ProjectError::NotFound(what.into())
    }
}
