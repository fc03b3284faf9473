//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod employee_repository;
pub mod entities;
pub(crate) mod ex_employee_repository;
mod hr_account_repository;
pub(crate) mod payroll_repository;

pub use employee_repository::{EmployeeRepository, EmployeeStore};
pub use ex_employee_repository::{ExEmployeeRepository, ExEmployeeStore};
pub use hr_account_repository::{HrAccountRepository, HrAccountStore};
pub use payroll_repository::{PayrollRepository, PayrollStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use ex_employee_repository::MockExEmployeeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use hr_account_repository::MockHrAccountRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use payroll_repository::MockPayrollRepository;
