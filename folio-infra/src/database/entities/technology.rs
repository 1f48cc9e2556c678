use folio_domain::Technology;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 技术实体，对应数据库中的technologies表
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "technologies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    pub slug: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_technology::Entity")]
    ProjectTechnology,
}

impl Related<super::project_technology::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectTechnology.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Technology {
    fn from(model: Model) -> Self {
        Technology {
            id: model.id,
            name: model.name,
            slug: model.slug,
        }
    }
}
