pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_types_table;
mod m20250101_000002_create_technologies_table;
mod m20250101_000003_create_projects_table;
mod m20250101_000004_create_project_technology_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_types_table::Migration),
            Box::new(m20250101_000002_create_technologies_table::Migration),
            Box::new(m20250101_000003_create_projects_table::Migration),
            Box::new(m20250101_000004_create_project_technology_table::Migration),
        ]
    }
}
