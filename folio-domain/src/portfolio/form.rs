use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use validator::{Validate, ValidationError, ValidationErrors};
use super::slug::slugify;

/// 校验失败，按字段汇总错误信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationFailure {
    /// 单字段错误
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut failure = Self::default();
        failure.add(field, message);
        failure
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_default().push(message.into());
    }

    /// 合并另一组错误
    pub fn merge(&mut self, other: ValidationFailure) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.keys().map(String::as_str).collect();
        write!(f, "validation failed for: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationFailure {}

impl From<ValidationErrors> for ValidationFailure {
    fn from(errors: ValidationErrors) -> Self {
        let mut failure = Self::default();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                failure.add(field.to_string(), message);
            }
        }
        failure
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// 项目表单原始输入
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProjectForm {
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "must be at most 255 characters")
    )]
    pub title: String,

    #[serde(alias = "typeId")]
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub type_id: Option<i32>,
}

impl ProjectForm {
    pub fn new(title: impl Into<String>, type_id: Option<i32>) -> Self {
        Self {
            title: title.into(),
            type_id,
        }
    }

    /// 校验并返回规范化后的字段
    pub fn validated(self) -> Result<ProjectFields, ValidationFailure> {
        self.validate()?;
        Ok(ProjectFields {
            title: self.title.trim().to_string(),
            type_id: self.type_id,
        })
    }
}

/// 通过校验的项目字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFields {
    pub title: String,
    pub type_id: Option<i32>,
}

impl ProjectFields {
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}

/// 类型/技术表单
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TaxonomyForm {
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    pub name: String,
}

impl TaxonomyForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// 校验并返回去除首尾空白的名称
    pub fn validated(self) -> Result<String, ValidationFailure> {
        self.validate()?;
        Ok(self.name.trim().to_string())
    }
}

/// 更新项目时对技术关联的处理意图
///
/// 请求中携带了技术列表（即使为空）时按列表同步；
/// 请求中完全没有该字段时移除全部关联。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TechnologyUpdateIntent {
    Replace(Vec<i32>),
    ClearAll,
}

impl TechnologyUpdateIntent {
    pub fn from_submitted(ids: Option<Vec<i32>>) -> Self {
        match ids {
            Some(ids) => Self::Replace(ids),
            None => Self::ClearAll,
        }
    }

    /// 处理完成后应保留的技术ID
    pub fn target_ids(&self) -> &[i32] {
        match self {
            Self::Replace(ids) => ids,
            Self::ClearAll => &[],
        }
    }
}
