//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use sea_orm::DatabaseConnection;

use hr_payroll_api::domain::{
    Employee, EmployeeDetails, EmployeeForm, Gender, HasDisease, NewPayroll, Payroll,
    PostAppliedFor,
};
use hr_payroll_api::errors::{AppError, AppResult};
use hr_payroll_api::infra::{
    EmployeeRepository, ExEmployeeRepository, HrAccountRepository, MockEmployeeRepository,
    MockExEmployeeRepository, MockHrAccountRepository, MockPayrollRepository, PayrollRepository,
    TransactionContext, UnitOfWork,
};

/// Unit of Work over mocked repositories.
///
/// Transactions need a real connection; see `archive_test.rs` for those.
#[derive(Default)]
pub struct TestUnitOfWork {
    pub employees: MockEmployeeRepository,
    pub ex_employees: MockExEmployeeRepository,
    pub payrolls: MockPayrollRepository,
    pub hr_accounts: MockHrAccountRepository,
}

impl TestUnitOfWork {
    pub fn into_arc(self) -> Arc<SharedUnitOfWork> {
        Arc::new(SharedUnitOfWork {
            employees: Arc::new(self.employees),
            ex_employees: Arc::new(self.ex_employees),
            payrolls: Arc::new(self.payrolls),
            hr_accounts: Arc::new(self.hr_accounts),
        })
    }
}

pub struct SharedUnitOfWork {
    employees: Arc<MockEmployeeRepository>,
    ex_employees: Arc<MockExEmployeeRepository>,
    payrolls: Arc<MockPayrollRepository>,
    hr_accounts: Arc<MockHrAccountRepository>,
}

#[async_trait]
impl UnitOfWork for SharedUnitOfWork {
    fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employees.clone()
    }

    fn ex_employees(&self) -> Arc<dyn ExEmployeeRepository> {
        self.ex_employees.clone()
    }

    fn payrolls(&self) -> Arc<dyn PayrollRepository> {
        self.payrolls.clone()
    }

    fn hr_accounts(&self) -> Arc<dyn HrAccountRepository> {
        self.hr_accounts.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        Err(AppError::internal("Transactions not supported in test mock"))
    }
}

/// A registration form that passes every rule.
pub fn valid_form() -> EmployeeForm {
    let mut form = EmployeeForm::default();
    for (name, value) in [
        ("employee_id", "EMP-001"),
        ("registration_date", "2024-01-10"),
        ("joining_date", "2024-02-01"),
        ("post_applied_for", "Employee"),
        ("full_name", "Ayesha Khan"),
        ("gender", "Female"),
        ("cnic", "35202-1234567-8"),
        ("dob", "1996-07-21"),
        ("permanent_address", "12 Canal Road, Lahore"),
        ("contact_number", "03001234567"),
        ("email", "ayesha@example.com"),
        ("degree", "BSCS"),
        ("institute", "PUCIT"),
        ("grade", "A"),
        ("year", "2018"),
        ("in_time", "09:00"),
        ("out_time", "17:00"),
        ("Salary_Cap", "90000"),
        ("guardian_phone", "03007654321"),
        ("has_disease", "No"),
    ] {
        form.set(name, value.to_string());
    }
    form
}

pub fn sample_details() -> EmployeeDetails {
    EmployeeDetails {
        employee_id: "EMP-001".to_string(),
        registration_date: date(2024, 1, 10),
        joining_date: date(2024, 2, 1),
        post_applied_for: PostAppliedFor::Employee,
        full_name: "Ayesha Khan".to_string(),
        gender: Gender::Female,
        cnic: "35202-1234567-8".to_string(),
        dob: date(1996, 7, 21),
        permanent_address: "12 Canal Road, Lahore".to_string(),
        contact_number: "03001234567".to_string(),
        email: "ayesha@example.com".to_string(),
        position: None,
        organization: None,
        degree: "BSCS".to_string(),
        institute: "PUCIT".to_string(),
        grade: "A".to_string(),
        year: 2018,
        teaching_subjects: None,
        teaching_institute: None,
        teaching_contact: None,
        skills: Some(vec!["rust".to_string(), "sql".to_string()]),
        description: None,
        in_time: "09:00".to_string(),
        out_time: "17:00".to_string(),
        salary_cap: 90000,
        guardian_phone: "03007654321".to_string(),
        reference_name: None,
        reference_contact: None,
        has_disease: HasDisease::No,
        disease_description: None,
        image: None,
    }
}

pub fn sample_employee(id: i32) -> Employee {
    let stamp = Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap();
    Employee {
        id,
        details: sample_details(),
        created_at: stamp,
        updated_at: stamp,
    }
}

pub fn stored(details: EmployeeDetails, id: i32) -> Employee {
    Employee {
        details,
        ..sample_employee(id)
    }
}

pub fn sample_payroll_data() -> NewPayroll {
    NewPayroll {
        employee_id: "EMP-001".to_string(),
        full_name: "Ayesha Khan".to_string(),
        month: "2024-05".to_string(),
        total_working_hours: 168.0,
        hourly_wage: 500.0,
        gross_salary: 84000.0,
        salary_cap: 90000.0,
        official_working_days: 21,
        ..Default::default()
    }
}

pub fn sample_payroll(id: i32) -> Payroll {
    let stamp = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    Payroll {
        id,
        data: sample_payroll_data(),
        created_at: stamp,
        updated_at: stamp,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Statements recorded by a mock connection, rendered for substring checks.
///
/// Every service holding the connection must be dropped first.
pub fn transaction_log(db: Arc<DatabaseConnection>) -> String {
    let db = Arc::try_unwrap(db)
        .ok()
        .expect("mock connection is still shared");
    format!("{:?}", db.into_transaction_log())
}
