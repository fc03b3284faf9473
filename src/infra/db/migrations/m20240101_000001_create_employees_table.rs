//! Migration: Create employees table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table
            .table(Employees::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Employees::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            );
        business_columns(&mut table);
        table
            .col(
                ColumnDef::new(Employees::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(
                ColumnDef::new(Employees::UpdatedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            );

        manager.create_table(table.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

/// Columns shared by `employees` and `ex_employees`.
pub(super) fn business_columns(table: &mut TableCreateStatement) {
    table
        .col(ColumnDef::new(Employees::EmployeeId).string().not_null().unique_key())
        .col(ColumnDef::new(Employees::RegistrationDate).date().not_null())
        .col(ColumnDef::new(Employees::JoiningDate).date().not_null())
        .col(ColumnDef::new(Employees::PostAppliedFor).string().not_null())
        .col(ColumnDef::new(Employees::FullName).string().not_null())
        .col(ColumnDef::new(Employees::Gender).string().not_null())
        .col(ColumnDef::new(Employees::Cnic).string().not_null().unique_key())
        .col(ColumnDef::new(Employees::Dob).date().not_null())
        .col(ColumnDef::new(Employees::PermanentAddress).text().not_null())
        .col(ColumnDef::new(Employees::ContactNumber).string().not_null())
        .col(ColumnDef::new(Employees::Email).string().not_null().unique_key())
        .col(ColumnDef::new(Employees::Position).string().null())
        .col(ColumnDef::new(Employees::Organization).string().null())
        .col(ColumnDef::new(Employees::Degree).string().not_null())
        .col(ColumnDef::new(Employees::Institute).string().not_null())
        .col(ColumnDef::new(Employees::Grade).string().not_null())
        .col(ColumnDef::new(Employees::Year).integer().not_null())
        .col(ColumnDef::new(Employees::TeachingSubjects).string().null())
        .col(ColumnDef::new(Employees::TeachingInstitute).string().null())
        .col(ColumnDef::new(Employees::TeachingContact).string().null())
        .col(ColumnDef::new(Employees::Skills).json_binary().null())
        .col(ColumnDef::new(Employees::Description).text().null())
        .col(ColumnDef::new(Employees::InTime).string().not_null())
        .col(ColumnDef::new(Employees::OutTime).string().not_null())
        .col(ColumnDef::new(Employees::SalaryCap).integer().not_null())
        .col(ColumnDef::new(Employees::GuardianPhone).string().not_null())
        .col(ColumnDef::new(Employees::ReferenceName).string().null())
        .col(ColumnDef::new(Employees::ReferenceContact).string().null())
        .col(ColumnDef::new(Employees::HasDisease).string().not_null())
        .col(ColumnDef::new(Employees::DiseaseDescription).text().null())
        .col(ColumnDef::new(Employees::Image).binary().null());
}

#[derive(Iden)]
pub(super) enum Employees {
    Table,
    Id,
    EmployeeId,
    RegistrationDate,
    JoiningDate,
    PostAppliedFor,
    FullName,
    Gender,
    Cnic,
    Dob,
    PermanentAddress,
    ContactNumber,
    Email,
    Position,
    Organization,
    Degree,
    Institute,
    Grade,
    Year,
    TeachingSubjects,
    TeachingInstitute,
    TeachingContact,
    Skills,
    Description,
    InTime,
    OutTime,
    SalaryCap,
    GuardianPhone,
    ReferenceName,
    ReferenceContact,
    HasDisease,
    DiseaseDescription,
    Image,
    CreatedAt,
    UpdatedAt,
}
