pub mod attachment;
pub mod database;

pub use attachment::{BlobKey, BlobStore, FileTypeValidator, LocalBlobStore, StorageError, UploadedFile};
pub use database::{
    ConnectionSettings, DatabaseManager,
    NewProject, ProjectChanges, SyncChanges,
    ProjectRepository, SeaOrmProjectRepository,
    TaxonomyRepository, SeaOrmTaxonomyRepository,
};
