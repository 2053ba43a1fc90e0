use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m20251001_000001_create_users::Migration),
            Box::new(migrations::m20251001_000002_create_assignments::Migration),
            Box::new(migrations::m20251001_000003_create_submissions::Migration),
        ]
    }
}
