use crate::database::entities::{project, project_technology, project_type, technology};
use async_trait::async_trait;
use folio_api::{ListOptions, ListResult};
use folio_domain::{ProjectType, Technology};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait, Value,
};
use std::sync::Arc;

/// TaxonomyRepository trait 定义项目类型和技术的数据访问操作
#[async_trait]
pub trait TaxonomyRepository: Send + Sync {
    async fn all_types(&self) -> Result<Vec<ProjectType>, DbErr>;

    async fn paginate_types(&self, options: &ListOptions) -> Result<ListResult<ProjectType>, DbErr>;

    async fn find_type(&self, id: i32) -> Result<Option<ProjectType>, DbErr>;

    async fn insert_type(&self, name: String, slug: String) -> Result<ProjectType, DbErr>;

    /// 删除类型，引用它的项目 type_id 置空
    async fn delete_type(&self, id: i32) -> Result<bool, DbErr>;

    async fn all_technologies(&self) -> Result<Vec<Technology>, DbErr>;

    async fn paginate_technologies(&self, options: &ListOptions) -> Result<ListResult<Technology>, DbErr>;

    /// 按ID批量查询，不存在的ID被忽略
    async fn find_technologies(&self, ids: &[i32]) -> Result<Vec<Technology>, DbErr>;

    async fn insert_technology(&self, name: String, slug: String) -> Result<Technology, DbErr>;

    /// 删除技术及其所有项目关联
    async fn delete_technology(&self, id: i32) -> Result<bool, DbErr>;
}

pub struct SeaOrmTaxonomyRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmTaxonomyRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaxonomyRepository for SeaOrmTaxonomyRepository {
    async fn all_types(&self) -> Result<Vec<ProjectType>, DbErr> {
        let models = project_type::Entity::find()
            .order_by_asc(project_type::Column::Name)
            .all(&*self.db)
            .await?;
        Ok(models.into_iter().map(ProjectType::from).collect())
    }

    async fn paginate_types(&self, options: &ListOptions) -> Result<ListResult<ProjectType>, DbErr> {
        let paginator = project_type::Entity::find()
            .order_by_asc(project_type::Column::Id)
            .paginate(&*self.db, u64::from(options.size()));
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(options.page_index()).await?;

        Ok(ListResult::new(
            items.into_iter().map(ProjectType::from).collect(),
            total,
            options.page(),
            options.size(),
        ))
    }

    async fn find_type(&self, id: i32) -> Result<Option<ProjectType>, DbErr> {
        let model = project_type::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(model.map(ProjectType::from))
    }

    async fn insert_type(&self, name: String, slug: String) -> Result<ProjectType, DbErr> {
        let model = project_type::ActiveModel {
            name: Set(name),
            slug: Set(slug),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;
        Ok(ProjectType::from(model))
    }

    async fn delete_type(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let detached = project::Entity::update_many()
            .col_expr(project::Column::TypeId, Expr::value(Value::Int(None)))
            .filter(project::Column::TypeId.eq(id))
            .exec(&txn)
            .await?;
        let result = project_type::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        tracing::debug!("Deleted type {}, {} projects left untyped", id, detached.rows_affected);
        Ok(result.rows_affected > 0)
    }

    async fn all_technologies(&self) -> Result<Vec<Technology>, DbErr> {
        let models = technology::Entity::find()
            .order_by_asc(technology::Column::Name)
            .all(&*self.db)
            .await?;
        Ok(models.into_iter().map(Technology::from).collect())
    }

    async fn paginate_technologies(&self, options: &ListOptions) -> Result<ListResult<Technology>, DbErr> {
        let paginator = technology::Entity::find()
            .order_by_asc(technology::Column::Id)
            .paginate(&*self.db, u64::from(options.size()));
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(options.page_index()).await?;

        Ok(ListResult::new(
            items.into_iter().map(Technology::from).collect(),
            total,
            options.page(),
            options.size(),
        ))
    }

    async fn find_technologies(&self, ids: &[i32]) -> Result<Vec<Technology>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = technology::Entity::find()
            .filter(technology::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(technology::Column::Id)
            .all(&*self.db)
            .await?;
        Ok(models.into_iter().map(Technology::from).collect())
    }

    async fn insert_technology(&self, name: String, slug: String) -> Result<Technology, DbErr> {
        let model = technology::ActiveModel {
            name: Set(name),
            slug: Set(slug),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;
        Ok(Technology::from(model))
    }

    async fn delete_technology(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        project_technology::Entity::delete_many()
            .filter(project_technology::Column::TechnologyId.eq(id))
            .exec(&txn)
            .await?;
        let result = technology::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}
