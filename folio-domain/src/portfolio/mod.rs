pub mod project;
pub mod taxonomy;
pub mod form;
mod slug;

pub use project::{Project, ProjectDetails};
pub use taxonomy::{ProjectType, Technology};
pub use form::{ProjectForm, ProjectFields, TaxonomyForm, TechnologyUpdateIntent, ValidationFailure};
pub use slug::slugify;

/// 作品集相关的常量
pub mod constant {
    /// 项目图片在存储中的命名空间
    pub const PROJECT_IMAGE_NAMESPACE: &str = "project_images";
}
