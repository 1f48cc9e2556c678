pub mod entities;
pub mod manager;
pub mod repository;
pub mod taxonomy_repository;


pub use manager::{ConnectionSettings, DatabaseManager};
pub use repository::{NewProject, ProjectChanges, ProjectRepository, SeaOrmProjectRepository, SyncChanges};
pub use taxonomy_repository::{SeaOrmTaxonomyRepository, TaxonomyRepository};
