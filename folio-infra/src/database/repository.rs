use crate::database::entities::{project, project_technology};
use async_trait::async_trait;
use chrono::Utc;
use folio_api::{ListOptions, ListResult};
use folio_domain::{Project, TechnologyUpdateIntent};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::collections::HashSet;
use std::sync::Arc;

/// 待插入的项目记录
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub slug: String,
    pub type_id: Option<i32>,
    pub image: Option<String>,
}

/// 项目字段变更
///
/// `image` 为 `Some` 时替换图片key，为 `None` 时保留原值。
#[derive(Debug, Clone)]
pub struct ProjectChanges {
    pub title: String,
    pub slug: String,
    pub type_id: Option<i32>,
    pub image: Option<String>,
}

/// 同步关联的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncChanges {
    pub attached: Vec<i32>,
    pub detached: Vec<i32>,
}

/// ProjectRepository trait 定义项目及其技术关联的数据访问操作
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Project>, DbErr>;

    /// 分页列出项目，`type_id` 存在时只返回该类型的项目
    async fn paginate(&self, type_id: Option<i32>, options: &ListOptions) -> Result<ListResult<Project>, DbErr>;

    /// 在同一事务中插入项目并附加技术
    async fn insert(&self, record: NewProject, technology_ids: &[i32]) -> Result<Project, DbErr>;

    /// 在同一事务中更新项目字段并按意图处理技术关联
    async fn update(
        &self,
        id: i32,
        changes: ProjectChanges,
        technologies: &TechnologyUpdateIntent,
    ) -> Result<Project, DbErr>;

    /// 删除项目及其全部关联，返回是否删除了记录
    async fn delete(&self, id: i32) -> Result<bool, DbErr>;

    async fn technology_ids(&self, project_id: i32) -> Result<Vec<i32>, DbErr>;

    /// 追加关联，不移除已有关联，返回新增的技术ID
    async fn attach(&self, project_id: i32, technology_ids: &[i32]) -> Result<Vec<i32>, DbErr>;

    /// 将关联精确同步为给定集合
    async fn sync(&self, project_id: i32, technology_ids: &[i32]) -> Result<SyncChanges, DbErr>;

    /// 移除全部关联，返回移除的行数
    async fn detach(&self, project_id: i32) -> Result<u64, DbErr>;
}

/// SeaOrmProjectRepository 使用Sea-ORM实现的Repository
pub struct SeaOrmProjectRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmProjectRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

async fn technology_ids_on<C: ConnectionTrait>(conn: &C, project_id: i32) -> Result<Vec<i32>, DbErr> {
    let rows = project_technology::Entity::find()
        .filter(project_technology::Column::ProjectId.eq(project_id))
        .order_by_asc(project_technology::Column::TechnologyId)
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(|row| row.technology_id).collect())
}

async fn attach_on<C: ConnectionTrait>(conn: &C, project_id: i32, technology_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
    let existing: HashSet<i32> = technology_ids_on(conn, project_id).await?.into_iter().collect();
    let mut seen = HashSet::new();
    let missing: Vec<i32> = technology_ids
        .iter()
        .copied()
        .filter(|id| !existing.contains(id) && seen.insert(*id))
        .collect();

    if missing.is_empty() {
        return Ok(missing);
    }

    let rows = missing.iter().map(|technology_id| project_technology::ActiveModel {
        project_id: Set(project_id),
        technology_id: Set(*technology_id),
    });
    project_technology::Entity::insert_many(rows)
        .exec_without_returning(conn)
        .await?;

    Ok(missing)
}

async fn sync_on<C: ConnectionTrait>(conn: &C, project_id: i32, technology_ids: &[i32]) -> Result<SyncChanges, DbErr> {
    let wanted: HashSet<i32> = technology_ids.iter().copied().collect();
    let detached: Vec<i32> = technology_ids_on(conn, project_id)
        .await?
        .into_iter()
        .filter(|id| !wanted.contains(id))
        .collect();

    if !detached.is_empty() {
        project_technology::Entity::delete_many()
            .filter(project_technology::Column::ProjectId.eq(project_id))
            .filter(project_technology::Column::TechnologyId.is_in(detached.clone()))
            .exec(conn)
            .await?;
    }

    let attached = attach_on(conn, project_id, technology_ids).await?;
    Ok(SyncChanges { attached, detached })
}

async fn detach_on<C: ConnectionTrait>(conn: &C, project_id: i32) -> Result<u64, DbErr> {
    let result = project_technology::Entity::delete_many()
        .filter(project_technology::Column::ProjectId.eq(project_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

#[async_trait]
impl ProjectRepository for SeaOrmProjectRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Project>, DbErr> {
        let model = project::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(model.map(Project::from))
    }

    async fn paginate(&self, type_id: Option<i32>, options: &ListOptions) -> Result<ListResult<Project>, DbErr> {
        let mut query = project::Entity::find();
        if let Some(type_id) = type_id {
            query = query.filter(project::Column::TypeId.eq(type_id));
        }

        let paginator = query
            .order_by_asc(project::Column::Id)
            .paginate(&*self.db, u64::from(options.size()));
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(options.page_index()).await?;

        Ok(ListResult::new(
            items.into_iter().map(Project::from).collect(),
            total,
            options.page(),
            options.size(),
        ))
    }

    async fn insert(&self, record: NewProject, technology_ids: &[i32]) -> Result<Project, DbErr> {
        let txn = self.db.begin().await?;

        let now = Utc::now();
        let model = project::ActiveModel {
            title: Set(record.title),
            slug: Set(record.slug),
            type_id: Set(record.type_id),
            image: Set(record.image),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        attach_on(&txn, model.id, technology_ids).await?;

        txn.commit().await?;
        Ok(Project::from(model))
    }

    async fn update(
        &self,
        id: i32,
        changes: ProjectChanges,
        technologies: &TechnologyUpdateIntent,
    ) -> Result<Project, DbErr> {
        let txn = self.db.begin().await?;

        let model = project::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("project {}", id)))?;

        let mut active: project::ActiveModel = model.into();
        active.title = Set(changes.title);
        active.slug = Set(changes.slug);
        active.type_id = Set(changes.type_id);
        if let Some(image) = changes.image {
            active.image = Set(Some(image));
        }
        active.updated_at = Set(Utc::now());
        let updated = active.update(&txn).await?;

        match technologies {
            TechnologyUpdateIntent::Replace(ids) => {
                let changes = sync_on(&txn, id, ids).await?;
                tracing::debug!(
                    "Synced technologies of project {}: attached {:?}, detached {:?}",
                    id, changes.attached, changes.detached
                );
            }
            TechnologyUpdateIntent::ClearAll => {
                let removed = detach_on(&txn, id).await?;
                tracing::debug!("Detached {} technologies from project {}", removed, id);
            }
        }

        txn.commit().await?;
        Ok(Project::from(updated))
    }

    async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        detach_on(&txn, id).await?;
        let result = project::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }

    async fn technology_ids(&self, project_id: i32) -> Result<Vec<i32>, DbErr> {
        technology_ids_on(&*self.db, project_id).await
    }

    async fn attach(&self, project_id: i32, technology_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        let txn = self.db.begin().await?;
        let attached = attach_on(&txn, project_id, technology_ids).await?;
        txn.commit().await?;
        Ok(attached)
    }

    async fn sync(&self, project_id: i32, technology_ids: &[i32]) -> Result<SyncChanges, DbErr> {
        let txn = self.db.begin().await?;
        let changes = sync_on(&txn, project_id, technology_ids).await?;
        txn.commit().await?;
        Ok(changes)
    }

    async fn detach(&self, project_id: i32) -> Result<u64, DbErr> {
        detach_on(&*self.db, project_id).await
    }
}
