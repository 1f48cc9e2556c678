use folio_domain::Project;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Project 实体，对应数据库中的projects表
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    pub slug: String,

    #[sea_orm(nullable)]
    pub type_id: Option<i32>,

    #[sea_orm(nullable)]
    pub image: Option<String>,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project_type::Entity",
        from = "Column::TypeId",
        to = "super::project_type::Column::Id",
        on_delete = "SetNull"
    )]
    ProjectType,

    #[sea_orm(has_many = "super::project_technology::Entity")]
    ProjectTechnology,
}

impl Related<super::project_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectType.def()
    }
}

impl Related<super::project_technology::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectTechnology.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Project {
    fn from(model: Model) -> Self {
        Project {
            id: model.id,
            title: model.title,
            slug: model.slug,
            type_id: model.type_id,
            image: model.image,
            created_at: Some(model.created_at),
            updated_at: Some(model.updated_at),
        }
    }
}
