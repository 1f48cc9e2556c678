use folio_domain::ProjectType;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 项目类型实体，对应数据库中的types表
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    pub slug: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project::Entity")]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ProjectType {
    fn from(model: Model) -> Self {
        ProjectType {
            id: model.id,
            name: model.name,
            slug: model.slug,
        }
    }
}
