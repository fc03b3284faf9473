//! Infrastructure layer - External systems integration
//!
//! - Database connection, pool settings and migrations
//! - Repositories over SeaORM entities
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    EmployeeRepository, EmployeeStore, ExEmployeeRepository, ExEmployeeStore,
    HrAccountRepository, HrAccountStore, PayrollRepository, PayrollStore,
};
pub use unit_of_work::{
    Persistence, TransactionContext, TxEmployeeRepository, TxExEmployeeRepository,
    TxPayrollRepository, UnitOfWork,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockEmployeeRepository, MockExEmployeeRepository, MockHrAccountRepository,
    MockPayrollRepository,
};
