pub use sea_orm_migration::prelude::*;

mod m20240101_000001_employees;
mod m20240102_000002_employees_email_unique;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_employees::Migration),
            Box::new(m20240102_000002_employees_email_unique::Migration),
        ]
    }
}
