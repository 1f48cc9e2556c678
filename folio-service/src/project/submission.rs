use folio_api::ListOptions;
use folio_domain::{Project, ProjectForm, ProjectType, Technology};
use folio_infra::UploadedFile;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 一次项目表单提交
#[derive(Debug, Clone, Default)]
pub struct ProjectSubmission {
    pub form: ProjectForm,
    pub image: Option<UploadedFile>,
    /// `None` 表示请求中完全没有技术字段
    pub technologies: Option<Vec<i32>>,
}

impl ProjectSubmission {
    pub fn new(form: ProjectForm) -> Self {
        Self {
            form,
            image: None,
            technologies: None,
        }
    }

    pub fn with_image(mut self, image: UploadedFile) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_technologies(mut self, ids: Vec<i32>) -> Self {
        self.technologies = Some(ids);
        self
    }
}

/// 项目列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub type_id: Option<i32>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<u32>,
}

impl ProjectQuery {
    pub fn list_options(&self) -> ListOptions {
        ListOptions::new(self.page)
    }
}

/// 参考数据列表的分页参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<u32>,
}

impl PageQuery {
    pub fn list_options(&self) -> ListOptions {
        ListOptions::new(self.page)
    }
}

/// 表单查询参数中的空字符串视为未提供
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

/// 写操作的结果：持久化后的项目和确认消息
#[derive(Debug, Clone, Serialize)]
pub struct RecordOutcome {
    pub message: String,
    pub project: Project,
}

impl RecordOutcome {
    pub fn created(project: Project) -> Self {
        Self::with_verb(project, "created")
    }

    pub fn updated(project: Project) -> Self {
        Self::with_verb(project, "updated")
    }

    pub fn deleted(project: Project) -> Self {
        Self::with_verb(project, "deleted")
    }

    fn with_verb(project: Project, verb: &str) -> Self {
        Self {
            message: format!("{} has been {}", project.title, verb),
            project,
        }
    }
}

/// 新建/编辑页面所需的数据
#[derive(Debug, Clone, Serialize)]
pub struct ProjectFormData {
    pub project: Project,
    #[serde(rename = "technologyIds")]
    pub technology_ids: Vec<i32>,
    pub types: Vec<ProjectType>,
    pub technologies: Vec<Technology>,
}
