use crate::error::ProjectError;
use async_trait::async_trait;
use folio_api::{Actor, ListOptions, ListResult};
use folio_domain::{slugify, ProjectType, TaxonomyForm};
use folio_infra::TaxonomyRepository;
use std::sync::Arc;

/// 项目类型服务trait
#[async_trait]
pub trait TypeService: Send + Sync {
    async fn all(&self) -> Result<Vec<ProjectType>, ProjectError>;
    async fn paginate(&self, options: &ListOptions) -> Result<ListResult<ProjectType>, ProjectError>;
    async fn create(&self, actor: &Actor, form: TaxonomyForm) -> Result<ProjectType, ProjectError>;
    async fn delete(&self, actor: &Actor, id: i32) -> Result<(), ProjectError>;
}

pub struct DefaultTypeService {
    repository: Arc<dyn TaxonomyRepository>,
}

impl DefaultTypeService {
    pub fn new(repository: Arc<dyn TaxonomyRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TypeService for DefaultTypeService {
    async fn all(&self) -> Result<Vec<ProjectType>, ProjectError> {
        Ok(self.repository.all_types().await?)
    }

    async fn paginate(&self, options: &ListOptions) -> Result<ListResult<ProjectType>, ProjectError> {
        Ok(self.repository.paginate_types(options).await?)
    }

    async fn create(&self, actor: &Actor, form: TaxonomyForm) -> Result<ProjectType, ProjectError> {
        let name = form.validated()?;
        let slug = slugify(&name);
        let created = self.repository.insert_type(name, slug).await?;
        tracing::info!("Type {} ({}) created by {}", created.id, created.slug, actor.username);
        Ok(created)
    }

    async fn delete(&self, actor: &Actor, id: i32) -> Result<(), ProjectError> {
        if !self.repository.delete_type(id).await? {
            return Err(ProjectError::not_found(format!("type {}", id)));
        }
        tracing::info!("Type {} deleted by {}", id, actor.username);
        Ok(())
    }
}
