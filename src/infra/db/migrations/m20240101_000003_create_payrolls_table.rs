//! Migration: Create payrolls table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table
            .table(Payrolls::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Payrolls::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Payrolls::EmployeeId).string().not_null())
            .col(ColumnDef::new(Payrolls::FullName).string().not_null())
            .col(ColumnDef::new(Payrolls::Month).string_len(7).not_null());

        for figure in [
            Payrolls::TotalWorkingHours,
            Payrolls::NotAllowedHours,
            Payrolls::HourlyWage,
            Payrolls::DailyAllowanceRate,
            Payrolls::DailyAllowanceTotal,
            Payrolls::AllowedHoursPerDay,
            Payrolls::HourlySalary,
            Payrolls::GrossSalary,
            Payrolls::SalaryCap,
        ] {
            table.col(ColumnDef::new(figure).double().not_null().default(0.0));
        }

        for count in [
            Payrolls::OfficialWorkingDays,
            Payrolls::AdjustedWorkingDays,
            Payrolls::EffectiveAllowanceDays,
            Payrolls::OfficialLeaves,
            Payrolls::LateCount,
            Payrolls::EarlyCount,
            Payrolls::AbsentCount,
            Payrolls::EffectiveAbsentCount,
        ] {
            table.col(ColumnDef::new(count).integer().not_null().default(0));
        }

        for list in [
            Payrolls::LateDates,
            Payrolls::EarlyDates,
            Payrolls::AbsentDates,
            Payrolls::TableSectionData,
        ] {
            table.col(
                ColumnDef::new(list)
                    .json_binary()
                    .not_null()
                    .default(Expr::cust("'[]'::jsonb")),
            );
        }

        table
            .col(
                ColumnDef::new(Payrolls::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(
                ColumnDef::new(Payrolls::UpdatedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            );

        manager.create_table(table.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_payrolls_employee_month")
                    .table(Payrolls::Table)
                    .col(Payrolls::EmployeeId)
                    .col(Payrolls::Month)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payrolls::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Payrolls {
    Table,
    Id,
    EmployeeId,
    FullName,
    Month,
    TotalWorkingHours,
    NotAllowedHours,
    HourlyWage,
    DailyAllowanceRate,
    DailyAllowanceTotal,
    AllowedHoursPerDay,
    HourlySalary,
    GrossSalary,
    SalaryCap,
    OfficialWorkingDays,
    AdjustedWorkingDays,
    EffectiveAllowanceDays,
    OfficialLeaves,
    LateCount,
    EarlyCount,
    AbsentCount,
    EffectiveAbsentCount,
    LateDates,
    EarlyDates,
    AbsentDates,
    TableSectionData,
    CreatedAt,
    UpdatedAt,
}
