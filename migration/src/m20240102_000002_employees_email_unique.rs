use sea_orm_migration::prelude::*;

use crate::m20240101_000001_employees::Employees;

const INDEX_NAME: &str = "ux_employees_email";

/// Backs the service's email check with a constraint the store enforces atomically.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Employees::Table)
                    .col(Employees::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).table(Employees::Table).to_owned())
            .await
    }
}
