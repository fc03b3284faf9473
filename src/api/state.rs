//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AuthService, EmployeeService, ExEmployeeService, HrAccountService, PayrollService,
    ServiceContainer, Services,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Employee service
    pub employee_service: Arc<dyn EmployeeService>,
    /// Archive service
    pub ex_employee_service: Arc<dyn ExEmployeeService>,
    /// Payroll service
    pub payroll_service: Arc<dyn PayrollService>,
    /// Login dispatch
    pub auth_service: Arc<dyn AuthService>,
    /// HR account service
    pub hr_account_service: Arc<dyn HrAccountService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config.clone());
        Self::new(&container, database, config)
    }

    /// Create application state from any service container.
    ///
    /// Tests pass a container built over mocked repositories.
    pub fn new(container: &dyn ServiceContainer, database: Arc<Database>, config: Config) -> Self {
        Self {
            employee_service: container.employees(),
            ex_employee_service: container.ex_employees(),
            payroll_service: container.payrolls(),
            auth_service: container.auth(),
            hr_account_service: container.hr_accounts(),
            database,
            config: Arc::new(config),
        }
    }
}
