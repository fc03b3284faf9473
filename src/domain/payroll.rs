//! Monthly payroll rows. Figures arrive already computed; nothing is derived here.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A stored payroll row.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Payroll {
    pub id: i32,
    #[serde(flatten)]
    pub data: NewPayroll,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payroll figures for one employee and month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct NewPayroll {
    #[validate(length(min = 1, message = "employee_id is required"))]
    pub employee_id: String,
    #[validate(length(min = 1, message = "full_name is required"))]
    pub full_name: String,
    /// Calendar month as `YYYY-MM`
    #[validate(custom(function = "validate_month"))]
    #[schema(example = "2024-05")]
    pub month: String,
    pub total_working_hours: f64,
    pub not_allowed_hours: f64,
    pub hourly_wage: f64,
    pub daily_allowance_rate: f64,
    pub daily_allowance_total: f64,
    pub allowed_hours_per_day: f64,
    pub hourly_salary: f64,
    pub gross_salary: f64,
    #[serde(rename = "Salary_Cap")]
    pub salary_cap: f64,
    pub official_working_days: i32,
    pub adjusted_working_days: i32,
    pub effective_allowance_days: i32,
    pub official_leaves: i32,
    pub late_count: i32,
    pub early_count: i32,
    pub absent_count: i32,
    pub effective_absent_count: i32,
    pub late_dates: Vec<String>,
    pub early_dates: Vec<String>,
    pub absent_dates: Vec<String>,
    #[schema(value_type = Vec<Vec<Object>>)]
    pub table_section_data: Vec<Vec<Value>>,
}

/// Partial update: only keys present in the body change.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
pub struct PayrollPatch {
    #[validate(length(min = 1, message = "employee_id must not be empty"))]
    pub employee_id: Option<String>,
    #[validate(length(min = 1, message = "full_name must not be empty"))]
    pub full_name: Option<String>,
    #[validate(custom(function = "validate_month"))]
    pub month: Option<String>,
    pub total_working_hours: Option<f64>,
    pub not_allowed_hours: Option<f64>,
    pub hourly_wage: Option<f64>,
    pub daily_allowance_rate: Option<f64>,
    pub daily_allowance_total: Option<f64>,
    pub allowed_hours_per_day: Option<f64>,
    pub hourly_salary: Option<f64>,
    pub gross_salary: Option<f64>,
    #[serde(rename = "Salary_Cap")]
    pub salary_cap: Option<f64>,
    pub official_working_days: Option<i32>,
    pub adjusted_working_days: Option<i32>,
    pub effective_allowance_days: Option<i32>,
    pub official_leaves: Option<i32>,
    pub late_count: Option<i32>,
    pub early_count: Option<i32>,
    pub absent_count: Option<i32>,
    pub effective_absent_count: Option<i32>,
    pub late_dates: Option<Vec<String>>,
    pub early_dates: Option<Vec<String>>,
    pub absent_dates: Option<Vec<String>>,
    #[schema(value_type = Option<Vec<Vec<Object>>>)]
    pub table_section_data: Option<Vec<Vec<Value>>>,
}

impl NewPayroll {
    /// Apply a patch in place.
    pub fn apply(&mut self, patch: PayrollPatch) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }

        set(&mut self.employee_id, patch.employee_id);
        set(&mut self.full_name, patch.full_name);
        set(&mut self.month, patch.month);
        set(&mut self.total_working_hours, patch.total_working_hours);
        set(&mut self.not_allowed_hours, patch.not_allowed_hours);
        set(&mut self.hourly_wage, patch.hourly_wage);
        set(&mut self.daily_allowance_rate, patch.daily_allowance_rate);
        set(&mut self.daily_allowance_total, patch.daily_allowance_total);
        set(&mut self.allowed_hours_per_day, patch.allowed_hours_per_day);
        set(&mut self.hourly_salary, patch.hourly_salary);
        set(&mut self.gross_salary, patch.gross_salary);
        set(&mut self.salary_cap, patch.salary_cap);
        set(&mut self.official_working_days, patch.official_working_days);
        set(&mut self.adjusted_working_days, patch.adjusted_working_days);
        set(&mut self.effective_allowance_days, patch.effective_allowance_days);
        set(&mut self.official_leaves, patch.official_leaves);
        set(&mut self.late_count, patch.late_count);
        set(&mut self.early_count, patch.early_count);
        set(&mut self.absent_count, patch.absent_count);
        set(&mut self.effective_absent_count, patch.effective_absent_count);
        set(&mut self.late_dates, patch.late_dates);
        set(&mut self.early_dates, patch.early_dates);
        set(&mut self.absent_dates, patch.absent_dates);
        set(&mut self.table_section_data, patch.table_section_data);
    }
}

/// A body that is either one object or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

fn validate_month(month: &str) -> Result<(), ValidationError> {
    let valid = month.len() == 7
        && NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").is_ok();
    if valid {
        Ok(())
    } else {
        let mut err = ValidationError::new("month");
        err.message = Some("month must be formatted as YYYY-MM".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_figures_default_to_zero() {
        let row: NewPayroll = serde_json::from_value(json!({
            "employee_id": "EMP-001",
            "full_name": "Ayesha Khan",
            "month": "2024-05",
            "gross_salary": 95000.5,
            "Salary_Cap": 120000
        }))
        .unwrap();

        assert!(row.validate().is_ok());
        assert_eq!(row.gross_salary, 95000.5);
        assert_eq!(row.salary_cap, 120000.0);
        assert_eq!(row.late_count, 0);
        assert!(row.absent_dates.is_empty());
    }

    #[test]
    fn month_format_is_checked() {
        for bad in ["2024-5", "2024-13", "May 2024", ""] {
            let row = NewPayroll {
                employee_id: "EMP-001".into(),
                full_name: "Ayesha Khan".into(),
                month: bad.into(),
                ..Default::default()
            };
            assert!(row.validate().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn body_can_be_one_or_many() {
        let one: OneOrMany<NewPayroll> =
            serde_json::from_value(json!({"employee_id": "E1", "full_name": "A", "month": "2024-01"}))
                .unwrap();
        assert_eq!(one.into_vec().len(), 1);

        let many: OneOrMany<NewPayroll> = serde_json::from_value(json!([
            {"employee_id": "E1", "full_name": "A", "month": "2024-01"},
            {"employee_id": "E2", "full_name": "B", "month": "2024-01"}
        ]))
        .unwrap();
        assert_eq!(many.into_vec().len(), 2);
    }

    #[test]
    fn patch_touches_only_present_keys() {
        let mut row = NewPayroll {
            employee_id: "EMP-001".into(),
            full_name: "Ayesha Khan".into(),
            month: "2024-05".into(),
            late_count: 2,
            gross_salary: 1000.0,
            ..Default::default()
        };
        let patch: PayrollPatch =
            serde_json::from_value(json!({"late_count": 3, "late_dates": ["2024-05-02"]})).unwrap();

        row.apply(patch);
        assert_eq!(row.late_count, 3);
        assert_eq!(row.late_dates, vec!["2024-05-02".to_string()]);
        assert_eq!(row.gross_salary, 1000.0);
        assert_eq!(row.full_name, "Ayesha Khan");
    }
}
