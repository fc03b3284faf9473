//! Payroll database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use super::json_list;
use crate::domain::{NewPayroll, Payroll};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payrolls")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub employee_id: String,
    pub full_name: String,
    pub month: String,
    pub total_working_hours: f64,
    pub not_allowed_hours: f64,
    pub hourly_wage: f64,
    pub daily_allowance_rate: f64,
    pub daily_allowance_total: f64,
    pub allowed_hours_per_day: f64,
    pub hourly_salary: f64,
    pub gross_salary: f64,
    pub salary_cap: f64,
    pub official_working_days: i32,
    pub adjusted_working_days: i32,
    pub effective_allowance_days: i32,
    pub official_leaves: i32,
    pub late_count: i32,
    pub early_count: i32,
    pub absent_count: i32,
    pub effective_absent_count: i32,
    pub late_dates: Json,
    pub early_dates: Json,
    pub absent_dates: Json,
    pub table_section_data: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl TryFrom<Model> for Payroll {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Payroll {
            id: model.id,
            data: NewPayroll {
                employee_id: model.employee_id,
                full_name: model.full_name,
                month: model.month,
                total_working_hours: model.total_working_hours,
                not_allowed_hours: model.not_allowed_hours,
                hourly_wage: model.hourly_wage,
                daily_allowance_rate: model.daily_allowance_rate,
                daily_allowance_total: model.daily_allowance_total,
                allowed_hours_per_day: model.allowed_hours_per_day,
                hourly_salary: model.hourly_salary,
                gross_salary: model.gross_salary,
                salary_cap: model.salary_cap,
                official_working_days: model.official_working_days,
                adjusted_working_days: model.adjusted_working_days,
                effective_allowance_days: model.effective_allowance_days,
                official_leaves: model.official_leaves,
                late_count: model.late_count,
                early_count: model.early_count,
                absent_count: model.absent_count,
                effective_absent_count: model.effective_absent_count,
                late_dates: json_list(model.late_dates, "late_dates")?,
                early_dates: json_list(model.early_dates, "early_dates")?,
                absent_dates: json_list(model.absent_dates, "absent_dates")?,
                table_section_data: json_list(model.table_section_data, "table_section_data")?,
            },
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl ActiveModel {
    /// Overwrite every figure from a domain row.
    pub fn set_data(&mut self, data: NewPayroll) {
        self.employee_id = Set(data.employee_id);
        self.full_name = Set(data.full_name);
        self.month = Set(data.month);
        self.total_working_hours = Set(data.total_working_hours);
        self.not_allowed_hours = Set(data.not_allowed_hours);
        self.hourly_wage = Set(data.hourly_wage);
        self.daily_allowance_rate = Set(data.daily_allowance_rate);
        self.daily_allowance_total = Set(data.daily_allowance_total);
        self.allowed_hours_per_day = Set(data.allowed_hours_per_day);
        self.hourly_salary = Set(data.hourly_salary);
        self.gross_salary = Set(data.gross_salary);
        self.salary_cap = Set(data.salary_cap);
        self.official_working_days = Set(data.official_working_days);
        self.adjusted_working_days = Set(data.adjusted_working_days);
        self.effective_allowance_days = Set(data.effective_allowance_days);
        self.official_leaves = Set(data.official_leaves);
        self.late_count = Set(data.late_count);
        self.early_count = Set(data.early_count);
        self.absent_count = Set(data.absent_count);
        self.effective_absent_count = Set(data.effective_absent_count);
        self.late_dates = Set(Json::from(data.late_dates));
        self.early_dates = Set(Json::from(data.early_dates));
        self.absent_dates = Set(Json::from(data.absent_dates));
        self.table_section_data = Set(Json::from(data.table_section_data));
    }
}
