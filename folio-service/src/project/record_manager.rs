use crate::error::ProjectError;
use crate::project::submission::{ProjectFormData, ProjectQuery, ProjectSubmission, RecordOutcome};
use async_trait::async_trait;
use folio_api::{Actor, ListResult};
use folio_domain::portfolio::constant::PROJECT_IMAGE_NAMESPACE;
use folio_domain::{
    Project, ProjectDetails, ProjectFields, ProjectForm, TechnologyUpdateIntent, ValidationFailure,
};
use folio_infra::{
    BlobKey, BlobStore, FileTypeValidator, NewProject, ProjectChanges, ProjectRepository,
    TaxonomyRepository, UploadedFile,
};
use std::collections::BTreeSet;
use std::sync::Arc;

/// 新建时图片字段名
const IMAGE_FIELD: &str = "image";
/// 更新时图片字段名
const NEW_IMAGE_FIELD: &str = "new_image";

/// 项目记录管理trait
#[async_trait]
pub trait ProjectRecordManager: Send + Sync {
    /// 分页列出项目，可按类型过滤
    async fn list(&self, query: &ProjectQuery) -> Result<ListResult<Project>, ProjectError>;

    /// 按ID查找项目
    async fn find(&self, id: i32) -> Result<Project, ProjectError>;

    /// 项目详情（含类型与技术）
    async fn show(&self, id: i32) -> Result<ProjectDetails, ProjectError>;

    /// 新建页面数据
    async fn create_form(&self) -> Result<ProjectFormData, ProjectError>;

    /// 编辑页面数据
    async fn edit_form(&self, id: i32) -> Result<ProjectFormData, ProjectError>;

    /// 创建项目
    async fn create(&self, actor: &Actor, submission: ProjectSubmission) -> Result<RecordOutcome, ProjectError>;

    /// 更新项目
    async fn update(
        &self,
        actor: &Actor,
        existing: &Project,
        submission: ProjectSubmission,
    ) -> Result<RecordOutcome, ProjectError>;

    /// 删除项目
    async fn destroy(&self, actor: &Actor, existing: Project) -> Result<RecordOutcome, ProjectError>;
}

/// 默认项目记录管理实现
///
/// 图片的存储顺序：先保存新文件，再提交数据库事务，最后释放旧文件。
/// 事务失败时删除刚保存的新文件；提交后释放旧文件失败只记录日志。
pub struct DefaultProjectRecordManager {
    projects: Arc<dyn ProjectRepository>,
    taxonomy: Arc<dyn TaxonomyRepository>,
    blobs: Arc<dyn BlobStore>,
    image_validator: FileTypeValidator,
    max_image_size: usize,
}

impl DefaultProjectRecordManager {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        taxonomy: Arc<dyn TaxonomyRepository>,
        blobs: Arc<dyn BlobStore>,
        max_image_size: usize,
    ) -> Self {
        Self {
            projects,
            taxonomy,
            blobs,
            image_validator: FileTypeValidator::new().allow_images().max_size(max_image_size),
            max_image_size,
        }
    }

    /// 在任何副作用之前完成全部校验
    async fn check(
        &self,
        form: ProjectForm,
        image: Option<&UploadedFile>,
        image_field: &str,
        technology_ids: &[i32],
    ) -> Result<ProjectFields, ProjectError> {
        let mut failure = ValidationFailure::default();

        let fields = match form.validated() {
            Ok(fields) => Some(fields),
            Err(form_failure) => {
                failure.merge(form_failure);
                None
            }
        };

        if let Some(type_id) = fields.as_ref().and_then(|f| f.type_id) {
            if self.taxonomy.find_type(type_id).await?.is_none() {
                failure.add("type_id", "selected type does not exist");
            }
        }

        let wanted: BTreeSet<i32> = technology_ids.iter().copied().collect();
        if !wanted.is_empty() {
            let ids: Vec<i32> = wanted.iter().copied().collect();
            let found: BTreeSet<i32> = self
                .taxonomy
                .find_technologies(&ids)
                .await?
                .into_iter()
                .map(|t| t.id)
                .collect();
            let missing: Vec<String> = wanted.difference(&found).map(|id| id.to_string()).collect();
            if !missing.is_empty() {
                failure.add("technologies", format!("unknown technologies: {}", missing.join(", ")));
            }
        }

        if let Some(file) = image {
            if !self.image_validator.accepts(file) {
                failure.add(
                    image_field,
                    format!("must be an image of at most {} KB", self.max_image_size / 1024),
                );
            }
        }

        match fields {
            Some(fields) if failure.is_empty() => Ok(fields),
            _ => Err(ProjectError::Validation(failure)),
        }
    }

    async fn store_image(&self, file: &UploadedFile) -> Result<BlobKey, ProjectError> {
        let key = self
            .blobs
            .store(&file.content, PROJECT_IMAGE_NAMESPACE, &file.filename)
            .await?;
        Ok(key)
    }

    /// 释放不再被引用的图片，失败时记录为孤儿文件
    async fn release_image(&self, key: &BlobKey) {
        if let Err(e) = self.blobs.delete(key).await {
            tracing::warn!("Failed to release image {}, left as orphan: {}", key, e);
        }
    }

    async fn form_data(&self, project: Project, technology_ids: Vec<i32>) -> Result<ProjectFormData, ProjectError> {
        Ok(ProjectFormData {
            project,
            technology_ids,
            types: self.taxonomy.all_types().await?,
            technologies: self.taxonomy.all_technologies().await?,
        })
    }
}

/// 浏览器未选择文件时提交的空文件视为没有上传
fn present_upload(image: Option<UploadedFile>) -> Option<UploadedFile> {
    image.filter(|file| !file.is_empty())
}

#[async_trait]
impl ProjectRecordManager for DefaultProjectRecordManager {
    async fn list(&self, query: &ProjectQuery) -> Result<ListResult<Project>, ProjectError> {
        let result = self.projects.paginate(query.type_id, &query.list_options()).await?;
        Ok(result)
    }

    async fn find(&self, id: i32) -> Result<Project, ProjectError> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProjectError::not_found(format!("project {}", id)))
    }

    async fn show(&self, id: i32) -> Result<ProjectDetails, ProjectError> {
        let project = self.find(id).await?;

        let project_type = match project.type_id {
            Some(type_id) => self.taxonomy.find_type(type_id).await?,
            None => None,
        };
        let technology_ids = self.projects.technology_ids(id).await?;
        let technologies = self.taxonomy.find_technologies(&technology_ids).await?;

        Ok(ProjectDetails {
            project,
            project_type,
            technologies,
        })
    }

    async fn create_form(&self) -> Result<ProjectFormData, ProjectError> {
        self.form_data(Project::blank(), Vec::new()).await
    }

    async fn edit_form(&self, id: i32) -> Result<ProjectFormData, ProjectError> {
        let project = self.find(id).await?;
        let technology_ids = self.projects.technology_ids(id).await?;
        self.form_data(project, technology_ids).await
    }

    async fn create(&self, actor: &Actor, submission: ProjectSubmission) -> Result<RecordOutcome, ProjectError> {
        let ProjectSubmission { form, image, technologies } = submission;
        let image = present_upload(image);
        let technology_ids = technologies.unwrap_or_default();

        let fields = self.check(form, image.as_ref(), IMAGE_FIELD, &technology_ids).await?;

        let stored = match &image {
            Some(file) => Some(self.store_image(file).await?),
            None => None,
        };

        let record = NewProject {
            slug: fields.slug(),
            title: fields.title,
            type_id: fields.type_id,
            image: stored.as_ref().map(|key| key.to_string()),
        };

        let project = match self.projects.insert(record, &technology_ids).await {
            Ok(project) => project,
            Err(e) => {
                if let Some(key) = &stored {
                    self.release_image(key).await;
                }
                return Err(e.into());
            }
        };

        tracing::info!("Project {} ({}) created by {}", project.id, project.slug, actor.username);
        Ok(RecordOutcome::created(project))
    }

    async fn update(
        &self,
        actor: &Actor,
        existing: &Project,
        submission: ProjectSubmission,
    ) -> Result<RecordOutcome, ProjectError> {
        let ProjectSubmission { form, image, technologies } = submission;
        let new_image = present_upload(image);
        let intent = TechnologyUpdateIntent::from_submitted(technologies);

        let fields = self
            .check(form, new_image.as_ref(), NEW_IMAGE_FIELD, intent.target_ids())
            .await?;

        let stored = match &new_image {
            Some(file) => Some(self.store_image(file).await?),
            None => None,
        };

        let changes = ProjectChanges {
            slug: fields.slug(),
            title: fields.title,
            type_id: fields.type_id,
            image: stored.as_ref().map(|key| key.to_string()),
        };

        let project = match self.projects.update(existing.id, changes, &intent).await {
            Ok(project) => project,
            Err(e) => {
                if let Some(key) = &stored {
                    self.release_image(key).await;
                }
                return Err(e.into());
            }
        };

        if stored.is_some() {
            if let Some(old) = existing.image.as_deref() {
                if project.image.as_deref() != Some(old) {
                    self.release_image(&BlobKey::new(old)).await;
                }
            }
        }

        tracing::info!("Project {} ({}) updated by {}", project.id, project.slug, actor.username);
        Ok(RecordOutcome::updated(project))
    }

    async fn destroy(&self, actor: &Actor, existing: Project) -> Result<RecordOutcome, ProjectError> {
        if !self.projects.delete(existing.id).await? {
            return Err(ProjectError::not_found(format!("project {}", existing.id)));
        }

        if let Some(image) = existing.image.as_deref() {
            self.release_image(&BlobKey::new(image)).await;
        }

        tracing::info!("Project {} ({}) deleted by {}", existing.id, existing.slug, actor.username);
        Ok(RecordOutcome::deleted(existing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_api::ListOptions;
    use folio_infra::{
        DatabaseManager, LocalBlobStore, SeaOrmProjectRepository, SeaOrmTaxonomyRepository,
        StorageError, SyncChanges,
    };
    use sea_orm::DbErr;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;
    use tempfile::TempDir;

    const MAX_IMAGE_SIZE: usize = 64 * 1024;

    /// 可以按需失败的存储，包装真实的本地存储
    struct FlakyBlobStore {
        inner: LocalBlobStore,
        fail_store: AtomicBool,
        fail_delete: AtomicBool,
        stored: Mutex<Vec<BlobKey>>,
    }

    impl FlakyBlobStore {
        fn last_stored(&self) -> Option<BlobKey> {
            self.stored.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl BlobStore for FlakyBlobStore {
        async fn store(&self, content: &[u8], namespace: &str, original_name: &str) -> Result<BlobKey, StorageError> {
            if self.fail_store.load(Ordering::SeqCst) {
                return Err(StorageError::Backend("disk full".to_string()));
            }
            let key = self.inner.store(content, namespace, original_name).await?;
            self.stored.lock().unwrap().push(key.clone());
            Ok(key)
        }

        async fn read(&self, key: &BlobKey) -> Result<Vec<u8>, StorageError> {
            self.inner.read(key).await
        }

        async fn delete(&self, key: &BlobKey) -> Result<(), StorageError> {
            if self.fail_delete.load(Ordering::SeqCst) {
                return Err(StorageError::Backend("permission denied".to_string()));
            }
            self.inner.delete(key).await
        }

        async fn exists(&self, key: &BlobKey) -> Result<bool, StorageError> {
            self.inner.exists(key).await
        }
    }

    /// 写操作可以按需失败的项目仓库，包装真实的仓库
    struct FlakyProjectRepository {
        inner: SeaOrmProjectRepository,
        fail_writes: AtomicBool,
    }

    impl FlakyProjectRepository {
        fn check_writes(&self) -> Result<(), DbErr> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(DbErr::Custom("connection reset".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ProjectRepository for FlakyProjectRepository {
        async fn find_by_id(&self, id: i32) -> Result<Option<Project>, DbErr> {
            self.inner.find_by_id(id).await
        }

        async fn paginate(&self, type_id: Option<i32>, options: &ListOptions) -> Result<ListResult<Project>, DbErr> {
            self.inner.paginate(type_id, options).await
        }

        async fn insert(&self, record: NewProject, technology_ids: &[i32]) -> Result<Project, DbErr> {
            self.check_writes()?;
            self.inner.insert(record, technology_ids).await
        }

        async fn update(
            &self,
            id: i32,
            changes: ProjectChanges,
            technologies: &TechnologyUpdateIntent,
        ) -> Result<Project, DbErr> {
            self.check_writes()?;
            self.inner.update(id, changes, technologies).await
        }

        async fn delete(&self, id: i32) -> Result<bool, DbErr> {
            self.check_writes()?;
            self.inner.delete(id).await
        }

        async fn technology_ids(&self, project_id: i32) -> Result<Vec<i32>, DbErr> {
            self.inner.technology_ids(project_id).await
        }

        async fn attach(&self, project_id: i32, technology_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
            self.inner.attach(project_id, technology_ids).await
        }

        async fn sync(&self, project_id: i32, technology_ids: &[i32]) -> Result<SyncChanges, DbErr> {
            self.inner.sync(project_id, technology_ids).await
        }

        async fn detach(&self, project_id: i32) -> Result<u64, DbErr> {
            self.inner.detach(project_id).await
        }
    }

    struct Fixture {
        _temp_dir: TempDir,
        manager: DefaultProjectRecordManager,
        projects: Arc<FlakyProjectRepository>,
        taxonomy: Arc<SeaOrmTaxonomyRepository>,
        blobs: Arc<FlakyBlobStore>,
        actor: Actor,
    }

    impl Fixture {
        async fn new() -> Self {
            let temp_dir = TempDir::new().unwrap();
            let db = DatabaseManager::in_memory().await.unwrap().connection();
            let projects = Arc::new(FlakyProjectRepository {
                inner: SeaOrmProjectRepository::new(db.clone()),
                fail_writes: AtomicBool::new(false),
            });
            let taxonomy = Arc::new(SeaOrmTaxonomyRepository::new(db));
            let blobs = Arc::new(FlakyBlobStore {
                inner: LocalBlobStore::new(temp_dir.path().to_path_buf()),
                fail_store: AtomicBool::new(false),
                fail_delete: AtomicBool::new(false),
                stored: Mutex::new(Vec::new()),
            });
            let manager = DefaultProjectRecordManager::new(
                projects.clone(),
                taxonomy.clone(),
                blobs.clone(),
                MAX_IMAGE_SIZE,
            );
            Self {
                _temp_dir: temp_dir,
                manager,
                projects,
                taxonomy,
                blobs,
                actor: Actor::new("admin", vec!["admin".to_string()]),
            }
        }

        /// 预置技术，返回按插入顺序的ID
        async fn technologies(&self, count: usize) -> Vec<i32> {
            let mut ids = Vec::new();
            for i in 0..count {
                let name = format!("Tech {}", i + 1);
                let tech = self.taxonomy.insert_technology(name.clone(), folio_domain::slugify(&name)).await.unwrap();
                ids.push(tech.id);
            }
            ids
        }

        async fn create(&self, submission: ProjectSubmission) -> Project {
            self.manager.create(&self.actor, submission).await.unwrap().project
        }

        async fn blob_exists(&self, key: &str) -> bool {
            self.blobs.exists(&BlobKey::new(key)).await.unwrap()
        }
    }

    fn png(bytes: &[u8]) -> UploadedFile {
        UploadedFile::new("cover.png", Some("image/png".to_string()), bytes.to_vec())
    }

    fn form(title: &str) -> ProjectForm {
        ProjectForm::new(title, None)
    }

    #[tokio::test]
    async fn test_create_example_project() {
        let fx = Fixture::new().await;
        let tech = fx.technologies(5).await;

        let outcome = fx
            .manager
            .create(
                &fx.actor,
                ProjectSubmission::new(form("My First App")).with_technologies(vec![tech[1], tech[4]]),
            )
            .await
            .unwrap();

        assert_eq!(outcome.message, "My First App has been created");
        assert_eq!(outcome.project.slug, "my-first-app");
        assert_eq!(outcome.project.image, None);
        assert_eq!(
            fx.projects.technology_ids(outcome.project.id).await.unwrap(),
            vec![tech[1], tech[4]]
        );
    }

    #[tokio::test]
    async fn test_create_stores_image() {
        let fx = Fixture::new().await;

        let project = fx
            .create(ProjectSubmission::new(form("Gallery")).with_image(png(b"\x89PNG data")))
            .await;

        let key = project.image.clone().unwrap();
        assert!(key.starts_with("project_images/"));
        assert_eq!(fx.blobs.read(&BlobKey::new(key)).await.unwrap(), b"\x89PNG data");
    }

    #[tokio::test]
    async fn test_create_ignores_empty_upload() {
        let fx = Fixture::new().await;

        let empty = UploadedFile::new("", Some("application/octet-stream".to_string()), Vec::new());
        let project = fx.create(ProjectSubmission::new(form("No Image")).with_image(empty)).await;
        assert_eq!(project.image, None);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_before_side_effects() {
        let fx = Fixture::new().await;
        let pdf = UploadedFile::new("cv.pdf", Some("application/pdf".to_string()), b"%PDF".to_vec());

        let submission = ProjectSubmission {
            form: ProjectForm::new("  ", Some(99)),
            image: Some(pdf),
            technologies: Some(vec![42]),
        };
        let err = fx.manager.create(&fx.actor, submission).await.unwrap_err();

        match err {
            ProjectError::Validation(failure) => {
                assert!(failure.has_field("title"));
                assert!(failure.has_field("image"));
                assert!(failure.has_field("technologies"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        let page = fx.manager.list(&ProjectQuery::default()).await.unwrap();
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_type() {
        let fx = Fixture::new().await;

        let err = fx
            .manager
            .create(&fx.actor, ProjectSubmission::new(ProjectForm::new("Typed", Some(7))))
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::Validation(ref f) if f.has_field("type_id")));
    }

    #[tokio::test]
    async fn test_create_rejects_oversized_image() {
        let fx = Fixture::new().await;

        let big = png(&vec![0u8; MAX_IMAGE_SIZE + 1]);
        let err = fx
            .manager
            .create(&fx.actor, ProjectSubmission::new(form("Huge")).with_image(big))
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::Validation(ref f) if f.has_field("image")));
    }

    #[tokio::test]
    async fn test_create_rejects_image_mime_with_foreign_extension() {
        let fx = Fixture::new().await;

        let disguised = UploadedFile::new("cover.html", Some("image/png".to_string()), b"<script>".to_vec());
        let err = fx
            .manager
            .create(&fx.actor, ProjectSubmission::new(form("Disguised")).with_image(disguised))
            .await
            .unwrap_err();

        assert!(matches!(err, ProjectError::Validation(ref f) if f.has_field("image")));
        assert!(fx.blobs.last_stored().is_none());
    }

    #[tokio::test]
    async fn test_create_database_failure_releases_stored_image() {
        let fx = Fixture::new().await;
        fx.projects.fail_writes.store(true, Ordering::SeqCst);

        let err = fx
            .manager
            .create(&fx.actor, ProjectSubmission::new(form("Lost")).with_image(png(b"img")))
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::Database(_)));

        let stored = fx.blobs.last_stored().unwrap();
        assert!(!fx.blob_exists(stored.as_str()).await);
        let page = fx.manager.list(&ProjectQuery::default()).await.unwrap();
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_update_database_failure_keeps_old_image() {
        let fx = Fixture::new().await;
        let project = fx
            .create(ProjectSubmission::new(form("Steady")).with_image(png(b"old")))
            .await;
        let old_key = project.image.clone().unwrap();
        fx.projects.fail_writes.store(true, Ordering::SeqCst);

        let err = fx
            .manager
            .update(&fx.actor, &project, ProjectSubmission::new(form("Moved")).with_image(png(b"new")))
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::Database(_)));

        let new_key = fx.blobs.last_stored().unwrap();
        assert_ne!(new_key.as_str(), old_key);
        assert!(!fx.blob_exists(new_key.as_str()).await);

        let reloaded = fx.manager.find(project.id).await.unwrap();
        assert_eq!(reloaded.title, "Steady");
        assert_eq!(reloaded.image.as_deref(), Some(old_key.as_str()));
        assert_eq!(fx.blobs.read(&BlobKey::new(old_key)).await.unwrap(), b"old");
    }

    #[tokio::test]
    async fn test_create_storage_failure_leaves_no_record() {
        let fx = Fixture::new().await;
        fx.blobs.fail_store.store(true, Ordering::SeqCst);

        let err = fx
            .manager
            .create(&fx.actor, ProjectSubmission::new(form("Broken")).with_image(png(b"img")))
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::Storage(_)));

        let page = fx.manager.list(&ProjectQuery::default()).await.unwrap();
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_update_replaces_image_and_releases_old() {
        let fx = Fixture::new().await;
        let project = fx
            .create(ProjectSubmission::new(form("Old")).with_image(png(b"old")))
            .await;
        let old_key = project.image.clone().unwrap();

        let outcome = fx
            .manager
            .update(
                &fx.actor,
                &project,
                ProjectSubmission::new(form("Renamed Project")).with_image(png(b"new")),
            )
            .await
            .unwrap();

        assert_eq!(outcome.message, "Renamed Project has been updated");
        assert_eq!(outcome.project.slug, "renamed-project");
        let new_key = outcome.project.image.clone().unwrap();
        assert_ne!(new_key, old_key);
        assert!(!fx.blob_exists(&old_key).await);
        assert_eq!(fx.blobs.read(&BlobKey::new(new_key)).await.unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_update_without_image_keeps_key_and_blob() {
        let fx = Fixture::new().await;
        let project = fx
            .create(ProjectSubmission::new(form("Keep")).with_image(png(b"keep")))
            .await;
        let key = project.image.clone().unwrap();

        let outcome = fx
            .manager
            .update(&fx.actor, &project, ProjectSubmission::new(form("Keep It")))
            .await
            .unwrap();

        assert_eq!(outcome.project.image.as_deref(), Some(key.as_str()));
        assert!(fx.blob_exists(&key).await);
    }

    #[tokio::test]
    async fn test_update_storage_failure_keeps_old_image() {
        let fx = Fixture::new().await;
        let project = fx
            .create(ProjectSubmission::new(form("Stable")).with_image(png(b"stable")))
            .await;
        let key = project.image.clone().unwrap();
        fx.blobs.fail_store.store(true, Ordering::SeqCst);

        let err = fx
            .manager
            .update(&fx.actor, &project, ProjectSubmission::new(form("Changed")).with_image(png(b"x")))
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::Storage(_)));

        let reloaded = fx.manager.find(project.id).await.unwrap();
        assert_eq!(reloaded.title, "Stable");
        assert_eq!(reloaded.image.as_deref(), Some(key.as_str()));
        assert!(fx.blob_exists(&key).await);
    }

    #[tokio::test]
    async fn test_update_succeeds_when_old_image_release_fails() {
        let fx = Fixture::new().await;
        let project = fx
            .create(ProjectSubmission::new(form("Orphan")).with_image(png(b"old")))
            .await;
        let old_key = project.image.clone().unwrap();
        fx.blobs.fail_delete.store(true, Ordering::SeqCst);

        let outcome = fx
            .manager
            .update(&fx.actor, &project, ProjectSubmission::new(form("Orphan")).with_image(png(b"new")))
            .await
            .unwrap();

        assert_ne!(outcome.project.image.as_deref(), Some(old_key.as_str()));
        assert!(fx.blob_exists(&old_key).await);
    }

    #[tokio::test]
    async fn test_update_empty_and_absent_technologies_both_clear() {
        let fx = Fixture::new().await;
        let tech = fx.technologies(3).await;

        let synced = fx
            .create(ProjectSubmission::new(form("Synced")).with_technologies(tech.clone()))
            .await;
        fx.manager
            .update(&fx.actor, &synced, ProjectSubmission::new(form("Synced")).with_technologies(vec![]))
            .await
            .unwrap();

        let detached = fx
            .create(ProjectSubmission::new(form("Detached")).with_technologies(tech.clone()))
            .await;
        fx.manager
            .update(&fx.actor, &detached, ProjectSubmission::new(form("Detached")))
            .await
            .unwrap();

        assert!(fx.projects.technology_ids(synced.id).await.unwrap().is_empty());
        assert!(fx.projects.technology_ids(detached.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_syncs_technologies() {
        let fx = Fixture::new().await;
        let tech = fx.technologies(3).await;
        let project = fx
            .create(ProjectSubmission::new(form("App")).with_technologies(vec![tech[0], tech[1]]))
            .await;

        fx.manager
            .update(
                &fx.actor,
                &project,
                ProjectSubmission::new(form("App")).with_technologies(vec![tech[1], tech[2]]),
            )
            .await
            .unwrap();

        let details = fx.manager.show(project.id).await.unwrap();
        let ids: Vec<i32> = details.technologies.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![tech[1], tech[2]]);
    }

    #[tokio::test]
    async fn test_destroy_removes_record_associations_and_image() {
        let fx = Fixture::new().await;
        let tech = fx.technologies(2).await;
        let project = fx
            .create(
                ProjectSubmission::new(form("Gone"))
                    .with_image(png(b"bye"))
                    .with_technologies(tech.clone()),
            )
            .await;
        let key = project.image.clone().unwrap();

        let outcome = fx.manager.destroy(&fx.actor, project.clone()).await.unwrap();
        assert_eq!(outcome.message, "Gone has been deleted");

        assert!(matches!(fx.manager.find(project.id).await, Err(ProjectError::NotFound(_))));
        assert!(fx.projects.technology_ids(project.id).await.unwrap().is_empty());
        assert!(!fx.blob_exists(&key).await);
    }

    #[tokio::test]
    async fn test_destroy_missing_project() {
        let fx = Fixture::new().await;
        let mut ghost = Project::blank();
        ghost.id = 404;

        let err = fx.manager.destroy(&fx.actor, ghost).await.unwrap_err();
        assert!(matches!(err, ProjectError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_filters_by_type() {
        let fx = Fixture::new().await;
        let web = fx.taxonomy.insert_type("Web".into(), "web".into()).await.unwrap();
        let cli = fx.taxonomy.insert_type("CLI".into(), "cli".into()).await.unwrap();

        for i in 0..11 {
            let type_id = if i % 2 == 0 { Some(web.id) } else { Some(cli.id) };
            fx.create(ProjectSubmission::new(ProjectForm::new(format!("P{}", i), type_id)))
                .await;
        }

        let all = fx.manager.list(&ProjectQuery::default()).await.unwrap();
        assert_eq!(all.total, 11);
        assert_eq!(all.page, 1);
        assert_eq!(all.items.len(), 10);

        let web_only = fx
            .manager
            .list(&ProjectQuery { type_id: Some(web.id), page: None })
            .await
            .unwrap();
        assert_eq!(web_only.total, 6);
        assert!(web_only.items.iter().all(|p| p.type_id == Some(web.id)));
    }

    #[tokio::test]
    async fn test_show_and_form_data() {
        let fx = Fixture::new().await;
        let web = fx.taxonomy.insert_type("Web".into(), "web".into()).await.unwrap();
        let tech = fx.technologies(2).await;
        let project = fx
            .create(ProjectSubmission::new(ProjectForm::new("Site", Some(web.id))).with_technologies(vec![tech[0]]))
            .await;

        let details = fx.manager.show(project.id).await.unwrap();
        assert_eq!(details.project_type.map(|t| t.name), Some("Web".to_string()));
        assert_eq!(details.technologies.len(), 1);

        let blank = fx.manager.create_form().await.unwrap();
        assert_eq!(blank.project.id, 0);
        assert_eq!(blank.types.len(), 1);
        assert_eq!(blank.technologies.len(), 2);

        let edit = fx.manager.edit_form(project.id).await.unwrap();
        assert_eq!(edit.project.title, "Site");
        assert_eq!(edit.technology_ids, vec![tech[0]]);

        assert!(matches!(fx.manager.edit_form(999).await, Err(ProjectError::NotFound(_))));
    }
}
