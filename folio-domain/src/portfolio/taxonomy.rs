use serde::{Deserialize, Serialize};

/// 项目类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectType {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

/// 技术标签，与Project多对多
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub id: i32,
    pub name: String,
    pub slug: String,
}
