//! HTTP request handlers.

pub mod auth_handler;
pub mod employee_handler;
pub mod ex_employee_handler;
pub mod hr_handler;
pub mod payroll_handler;

pub use auth_handler::auth_routes;
pub use employee_handler::employee_routes;
pub use ex_employee_handler::ex_employee_routes;
pub use hr_handler::hr_routes;
pub use payroll_handler::payroll_routes;

use crate::errors::{AppError, AppResult};

/// Parse a numeric id taken from the URL.
pub(crate) fn parse_id(raw: &str, entity: &str) -> AppResult<i32> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::bad_request(format!("Invalid {} ID", entity)))
}
