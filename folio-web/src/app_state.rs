use folio_infra::{BlobStore, SeaOrmProjectRepository, SeaOrmTaxonomyRepository, TaxonomyRepository};
use folio_service::{
    DefaultProjectRecordManager, DefaultTechnologyService, DefaultTypeService,
    ProjectRecordManager, TechnologyService, TypeService,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// 应用状态
/// 包含所有需要的服务实例
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub project_manager: Arc<dyn ProjectRecordManager>,
    pub type_service: Arc<dyn TypeService>,
    pub technology_service: Arc<dyn TechnologyService>,
}

impl AppState {
    /// 基于数据库连接和文件存储组装服务
    pub fn new(db: Arc<DatabaseConnection>, blob_store: Arc<dyn BlobStore>, max_image_size: usize) -> Self {
        let projects = Arc::new(SeaOrmProjectRepository::new(db.clone()));
        let taxonomy: Arc<dyn TaxonomyRepository> = Arc::new(SeaOrmTaxonomyRepository::new(db.clone()));

        let project_manager = Arc::new(DefaultProjectRecordManager::new(
            projects,
            taxonomy.clone(),
            blob_store,
            max_image_size,
        ));

        Self {
            db,
            project_manager,
            type_service: Arc::new(DefaultTypeService::new(taxonomy.clone())),
            technology_service: Arc::new(DefaultTechnologyService::new(taxonomy)),
        }
    }
}
