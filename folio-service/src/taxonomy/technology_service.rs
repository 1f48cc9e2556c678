use crate::error::ProjectError;
use async_trait::async_trait;
use folio_api::{Actor, ListOptions, ListResult};
use folio_domain::{slugify, TaxonomyForm, Technology};
use folio_infra::TaxonomyRepository;
use std::sync::Arc;

/// 技术服务trait
#[async_trait]
pub trait TechnologyService: Send + Sync {
    async fn all(&self) -> Result<Vec<Technology>, ProjectError>;
    async fn paginate(&self, options: &ListOptions) -> Result<ListResult<Technology>, ProjectError>;
    async fn create(&self, actor: &Actor, form: TaxonomyForm) -> Result<Technology, ProjectError>;
    /// 删除技术，同时移除它与项目的所有关联
    async fn delete(&self, actor: &Actor, id: i32) -> Result<(), ProjectError>;
}

pub struct DefaultTechnologyService {
    repository: Arc<dyn TaxonomyRepository>,
}

impl DefaultTechnologyService {
    pub fn new(repository: Arc<dyn TaxonomyRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TechnologyService for DefaultTechnologyService {
    async fn all(&self) -> Result<Vec<Technology>, ProjectError> {
        Ok(self.repository.all_technologies().await?)
    }

    async fn paginate(&self, options: &ListOptions) -> Result<ListResult<Technology>, ProjectError> {
        Ok(self.repository.paginate_technologies(options).await?)
    }

    async fn create(&self, actor: &Actor, form: TaxonomyForm) -> Result<Technology, ProjectError> {
        let name = form.validated()?;
        let slug = slugify(&name);
        let created = self.repository.insert_technology(name, slug).await?;
        tracing::info!("Technology {} ({}) created by {}", created.id, created.slug, actor.username);
        Ok(created)
    }

    async fn delete(&self, actor: &Actor, id: i32) -> Result<(), ProjectError> {
        if !self.repository.delete_technology(id).await? {
            return Err(ProjectError::not_found(format!("technology {}", id)));
        }
        tracing::info!("Technology {} deleted by {}", id, actor.username);
        Ok(())
    }
}
