//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    auth_handler, employee_handler, ex_employee_handler, hr_handler, payroll_handler,
};
use crate::domain::{
    Employee, EmployeeDetails, ExEmployee, Gender, HasDisease, LoginRequest, NewPayroll, Payroll,
    PayrollPatch, PostAppliedFor,
};
use crate::types::MessageResponse;

/// OpenAPI documentation for the HR & Payroll API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HR & Payroll API",
        version = "0.1.0",
        description = "Employee records, archival, payroll rows and role-based login",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        // Employees
        employee_handler::list_employees,
        employee_handler::register_employee,
        employee_handler::update_employee,
        employee_handler::delete_employee,
        // Authentication
        auth_handler::login,
        auth_handler::profile,
        // HR accounts
        hr_handler::list_hr_accounts,
        hr_handler::create_hr_account,
        hr_handler::delete_hr_account,
        // Ex-employees
        ex_employee_handler::list_ex_employees,
        ex_employee_handler::create_ex_employee,
        ex_employee_handler::delete_ex_employee,
        // Payrolls
        payroll_handler::list_payrolls,
        payroll_handler::create_payrolls,
        payroll_handler::update_payroll,
        payroll_handler::delete_payroll,
        payroll_handler::delete_all_payrolls,
    ),
    components(
        schemas(
            Gender,
            PostAppliedFor,
            HasDisease,
            EmployeeDetails,
            Employee,
            ExEmployee,
            NewPayroll,
            PayrollPatch,
            Payroll,
            LoginRequest,
            MessageResponse,
            hr_handler::CreateHrRequest,
            hr_handler::DeleteHrRequest,
            hr_handler::HrListResponse,
            hr_handler::HrCreatedResponse,
        )
    ),
    tags(
        (name = "Employees", description = "Employee registration and maintenance"),
        (name = "Authentication", description = "Role-based login and profiles"),
        (name = "HR Accounts", description = "HR account management"),
        (name = "Ex-employees", description = "Archived employees"),
        (name = "Payrolls", description = "Payroll rows")
    )
)]
pub struct ApiDoc;
