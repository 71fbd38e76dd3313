pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_about_table;
mod m20260301_000002_create_projects_table;
mod m20260301_000003_create_skills_table;
mod m20260301_000004_create_contacts_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_about_table::Migration),
            Box::new(m20260301_000002_create_projects_table::Migration),
            Box::new(m20260301_000003_create_skills_table::Migration),
            Box::new(m20260301_000004_create_contacts_table::Migration),
        ]
    }
}
