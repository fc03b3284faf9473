//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, and reach storage through the Unit of Work.

mod auth_service;
pub mod container;
mod employee_service;
mod ex_employee_service;
mod hr_account_service;
mod payroll_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use employee_service::{EmployeeManager, EmployeeService};
pub use ex_employee_service::{ArchiveManager, ExEmployeeService};
pub use hr_account_service::{HrAccountManager, HrAccountService};
pub use payroll_service::{PayrollManager, PayrollService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
