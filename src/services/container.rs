//! Service Container - Centralized service access.
//!
//! Builds every service over one Unit of Work and hands them out as trait
//! objects, so handlers never see a concrete type.

use std::sync::Arc;

use super::{
    ArchiveManager, AuthService, Authenticator, EmployeeManager, EmployeeService,
    ExEmployeeService, HrAccountManager, HrAccountService, PayrollManager, PayrollService,
};
use crate::config::Config;
use crate::infra::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get employee service
    fn employees(&self) -> Arc<dyn EmployeeService>;

    /// Get ex-employee service
    fn ex_employees(&self) -> Arc<dyn ExEmployeeService>;

    /// Get payroll service
    fn payrolls(&self) -> Arc<dyn PayrollService>;

    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get HR account service
    fn hr_accounts(&self) -> Arc<dyn HrAccountService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    employee_service: Arc<dyn EmployeeService>,
    ex_employee_service: Arc<dyn ExEmployeeService>,
    payroll_service: Arc<dyn PayrollService>,
    auth_service: Arc<dyn AuthService>,
    hr_account_service: Arc<dyn HrAccountService>,
}

impl Services {
    /// Build every service over the given Unit of Work
    pub fn from_uow<U>(uow: Arc<U>, config: Config) -> Self
    where
        U: UnitOfWork + 'static,
    {
        Self {
            employee_service: Arc::new(EmployeeManager::new(uow.clone())),
            ex_employee_service: Arc::new(ArchiveManager::new(uow.clone())),
            payroll_service: Arc::new(PayrollManager::new(uow.clone())),
            auth_service: Arc::new(Authenticator::new(uow.clone(), config)),
            hr_account_service: Arc::new(HrAccountManager::new(uow)),
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: Arc<sea_orm::DatabaseConnection>, config: Config) -> Self {
        Self::from_uow(Arc::new(Persistence::new(db)), config)
    }
}

impl ServiceContainer for Services {
    fn employees(&self) -> Arc<dyn EmployeeService> {
        self.employee_service.clone()
    }

    fn ex_employees(&self) -> Arc<dyn ExEmployeeService> {
        self.ex_employee_service.clone()
    }

    fn payrolls(&self) -> Arc<dyn PayrollService> {
        self.payroll_service.clone()
    }

    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn hr_accounts(&self) -> Arc<dyn HrAccountService> {
        self.hr_account_service.clone()
    }
}
