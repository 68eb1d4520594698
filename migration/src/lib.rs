pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_table_projects;
mod m20260810_000002_create_table_skills;
mod m20260810_000003_create_table_experiences;
mod m20260810_000004_create_table_contacts;
mod m20260810_000005_create_table_blogs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_table_projects::Migration),
            Box::new(m20260810_000002_create_table_skills::Migration),
            Box::new(m20260810_000003_create_table_experiences::Migration),
            Box::new(m20260810_000004_create_table_contacts::Migration),
            Box::new(m20260810_000005_create_table_blogs::Migration),
        ]
    }
}
