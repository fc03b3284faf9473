//! Domain layer - Core business entities and logic
//!
//! Records, their field rules and the login principal. Nothing here
//! touches storage or HTTP.

pub mod employee;
pub mod hr_account;
pub mod image;
pub mod payroll;
pub mod stakeholder;
pub mod validation;

pub use employee::{
    Employee, EmployeeDetails, EmployeeForm, ExEmployee, Gender, HasDisease, PostAppliedFor,
};
pub use hr_account::HrAccount;
pub use image::UploadedImage;
pub use payroll::{NewPayroll, OneOrMany, Payroll, PayrollPatch};
pub use stakeholder::{Credentials, LoginRequest, Principal};
pub use validation::SkillsInput;
