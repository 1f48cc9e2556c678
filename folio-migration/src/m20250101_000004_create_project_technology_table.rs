use sea_orm_migration::prelude::*;
use super::m20250101_000002_create_technologies_table::Technologies;
use super::m20250101_000003_create_projects_table::Projects;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250101_000004_create_project_technology_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectTechnology::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ProjectTechnology::ProjectId).integer().not_null())
                    .col(ColumnDef::new(ProjectTechnology::TechnologyId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(ProjectTechnology::ProjectId)
                            .col(ProjectTechnology::TechnologyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_technology_project_id")
                            .from(ProjectTechnology::Table, ProjectTechnology::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_technology_technology_id")
                            .from(ProjectTechnology::Table, ProjectTechnology::TechnologyId)
                            .to(Technologies::Table, Technologies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectTechnology::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectTechnology {
    Table,
    ProjectId,
    TechnologyId,
}
