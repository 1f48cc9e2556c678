pub mod project;
pub mod project_type;
pub mod technology;
pub mod project_technology;
