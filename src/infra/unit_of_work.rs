//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and runs multi-step writes inside one
//! database transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};
use std::sync::Arc;

use super::repositories::{
    employee_repository, ex_employee_repository, payroll_repository, EmployeeRepository,
    EmployeeStore, ExEmployeeRepository, ExEmployeeStore, HrAccountRepository, HrAccountStore,
    PayrollRepository, PayrollStore,
};
use crate::domain::{Employee, EmployeeDetails, ExEmployee, NewPayroll, Payroll};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Not mockable directly because of the generic `transaction` method;
/// tests implement it by hand over mocked repositories.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get employee repository
    fn employees(&self) -> Arc<dyn EmployeeRepository>;

    /// Get ex-employee repository
    fn ex_employees(&self) -> Arc<dyn ExEmployeeRepository>;

    /// Get payroll repository
    fn payrolls(&self) -> Arc<dyn PayrollRepository>;

    /// Get HR account repository
    fn hr_accounts(&self) -> Arc<dyn HrAccountRepository>;

    /// Execute a closure within a transaction.
    ///
    /// Committed on success, rolled back on error. Runs at ReadCommitted;
    /// callers that need exclusivity take row locks.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn employees(&self) -> TxEmployeeRepository<'_> {
        TxEmployeeRepository { txn: self.txn }
    }

    pub fn ex_employees(&self) -> TxExEmployeeRepository<'_> {
        TxExEmployeeRepository { txn: self.txn }
    }

    pub fn payrolls(&self) -> TxPayrollRepository<'_> {
        TxPayrollRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: Arc<DatabaseConnection>,
    employee_repo: Arc<EmployeeStore>,
    ex_employee_repo: Arc<ExEmployeeStore>,
    payroll_repo: Arc<PayrollStore>,
    hr_account_repo: Arc<HrAccountStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            employee_repo: Arc::new(EmployeeStore::new(Arc::clone(&db))),
            ex_employee_repo: Arc::new(ExEmployeeStore::new(Arc::clone(&db))),
            payroll_repo: Arc::new(PayrollStore::new(Arc::clone(&db))),
            hr_account_repo: Arc::new(HrAccountStore::new(Arc::clone(&db))),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employee_repo.clone()
    }

    fn ex_employees(&self) -> Arc<dyn ExEmployeeRepository> {
        self.ex_employee_repo.clone()
    }

    fn payrolls(&self) -> Arc<dyn PayrollRepository> {
        self.payroll_repo.clone()
    }

    fn hr_accounts(&self) -> Arc<dyn HrAccountRepository> {
        self.hr_account_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-bound employee operations.
pub struct TxEmployeeRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxEmployeeRepository<'_> {
    /// Read and lock an employee row (`SELECT ... FOR UPDATE`).
    ///
    /// A concurrent caller blocks here until the holder commits, then sees
    /// whatever the holder left behind.
    pub async fn find_for_update(&self, id: i32) -> AppResult<Option<Employee>> {
        employee_repository::find_for_update(self.txn, id).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        employee_repository::delete(self.txn, id).await
    }
}

/// Transaction-bound archive operations.
pub struct TxExEmployeeRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxExEmployeeRepository<'_> {
    pub async fn create(
        &self,
        details: EmployeeDetails,
        exit_date: DateTime<Utc>,
    ) -> AppResult<ExEmployee> {
        ex_employee_repository::insert(self.txn, details, exit_date).await
    }
}

/// Transaction-bound payroll operations.
pub struct TxPayrollRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxPayrollRepository<'_> {
    pub async fn create(&self, data: NewPayroll) -> AppResult<Payroll> {
        payroll_repository::insert(self.txn, data).await
    }
}
