//! Migration: Create hr_users table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HrUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HrUsers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HrUsers::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(HrUsers::Password).string().not_null())
                    .col(
                        ColumnDef::new(HrUsers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HrUsers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HrUsers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum HrUsers {
    Table,
    Id,
    Email,
    Password,
    CreatedAt,
    UpdatedAt,
}
