use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::taxonomy::{ProjectType, Technology};

/// Project实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i32,

    pub title: String,

    /// 由标题派生，每次写入时重新计算
    pub slug: String,

    #[serde(rename = "typeId")]
    pub type_id: Option<i32>,

    /// 图片在存储中的key
    pub image: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// 空白项目，用于新建表单
    pub fn blank() -> Self {
        Self {
            id: 0,
            title: String::new(),
            slug: String::new(),
            type_id: None,
            image: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// 项目详情（包含关联的类型与技术）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub project: Project,

    #[serde(rename = "type")]
    pub project_type: Option<ProjectType>,

    pub technologies: Vec<Technology>,
}
