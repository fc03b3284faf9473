//! Payroll service - stores pre-computed payroll rows.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{NewPayroll, Payroll, PayrollPatch};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Payroll service trait for dependency injection.
#[async_trait]
pub trait PayrollService: Send + Sync {
    /// List all payroll rows
    async fn list_payrolls(&self) -> AppResult<Vec<Payroll>>;

    /// Insert one or more rows, all or nothing
    async fn create_payrolls(&self, rows: Vec<NewPayroll>) -> AppResult<Vec<Payroll>>;

    /// Change only the fields present in the patch
    async fn update_payroll(&self, id: i32, patch: PayrollPatch) -> AppResult<Payroll>;

    /// Delete one row
    async fn delete_payroll(&self, id: i32) -> AppResult<()>;

    /// Delete every row
    async fn delete_all_payrolls(&self) -> AppResult<u64>;
}

/// Concrete implementation of PayrollService using Unit of Work.
pub struct PayrollManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> PayrollManager<U> {
    /// Create new payroll service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> PayrollService for PayrollManager<U> {
    async fn list_payrolls(&self) -> AppResult<Vec<Payroll>> {
        self.uow.payrolls().list().await
    }

    async fn create_payrolls(&self, rows: Vec<NewPayroll>) -> AppResult<Vec<Payroll>> {
        if rows.is_empty() {
            return Err(AppError::validation("No payroll data provided"));
        }
        for row in &rows {
            row.validate()?;
        }

        let created = self
            .uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let mut created = Vec::with_capacity(rows.len());
                    for row in rows {
                        created.push(ctx.payrolls().create(row).await?);
                    }
                    Ok(created)
                })
            })
            .await?;

        tracing::info!(count = created.len(), "Payroll rows created");
        Ok(created)
    }

    async fn update_payroll(&self, id: i32, patch: PayrollPatch) -> AppResult<Payroll> {
        patch.validate()?;

        let mut payroll = self
            .uow
            .payrolls()
            .find_by_id(id)
            .await?
            .ok_or_not_found("Payroll")?;

        payroll.data.apply(patch);
        self.uow.payrolls().update(id, payroll.data).await
    }

    async fn delete_payroll(&self, id: i32) -> AppResult<()> {
        self.uow.payrolls().delete(id).await
    }

    async fn delete_all_payrolls(&self) -> AppResult<u64> {
        let deleted = self.uow.payrolls().delete_all().await?;
        tracing::warn!(deleted, "All payroll rows deleted");
        Ok(deleted)
    }
}
