//! Migration: Create ex_employees (archive) table.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_employees_table::business_columns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table
            .table(ExEmployees::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(ExEmployees::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            );
        business_columns(&mut table);
        table.col(
            ColumnDef::new(ExEmployees::ExitDate)
                .timestamp_with_time_zone()
                .not_null(),
        );

        manager.create_table(table.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExEmployees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ExEmployees {
    Table,
    Id,
    ExitDate,
}
