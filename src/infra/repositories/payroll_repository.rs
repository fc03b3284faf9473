//! Payroll repository.

use async_trait::async_trait;
use std::sync::Arc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};

use super::entities::payroll::{self, ActiveModel, Entity as PayrollEntity};
use crate::domain::{NewPayroll, Payroll};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Payroll repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PayrollRepository: Send + Sync {
    /// List all payroll rows, newest first
    async fn list(&self) -> AppResult<Vec<Payroll>>;

    /// Find payroll row by primary key
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Payroll>>;

    /// Overwrite the figures of an existing row
    async fn update(&self, id: i32, data: NewPayroll) -> AppResult<Payroll>;

    /// Delete one row
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Delete every row, returning how many went
    async fn delete_all(&self) -> AppResult<u64>;
}

/// Concrete implementation of PayrollRepository
pub struct PayrollStore {
    db: Arc<DatabaseConnection>,
}

impl PayrollStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PayrollRepository for PayrollStore {
    async fn list(&self) -> AppResult<Vec<Payroll>> {
        PayrollEntity::find()
            .order_by_desc(payroll::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(Payroll::try_from)
            .collect()
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Payroll>> {
        PayrollEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .map(Payroll::try_from)
            .transpose()
    }

    async fn update(&self, id: i32, data: NewPayroll) -> AppResult<Payroll> {
        let model = PayrollEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or_else(|| AppError::not_found("Payroll"))?;

        let mut active: ActiveModel = model.into();
        active.set_data(data);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(self.db.as_ref()).await?;
        Payroll::try_from(model)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = PayrollEntity::delete_by_id(id).exec(self.db.as_ref()).await?;
        if result.rows_affected == 0 {
            return Err(AppError::not_found("Payroll"));
        }
        Ok(())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = PayrollEntity::delete_many().exec(self.db.as_ref()).await?;
        Ok(result.rows_affected)
    }
}

/// Insert one payroll row on any connection or transaction.
pub(crate) async fn insert<C>(conn: &C, data: NewPayroll) -> AppResult<Payroll>
where
    C: ConnectionTrait,
{
    let now = chrono::Utc::now();
    let mut active = ActiveModel {
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    active.set_data(data);

    let model = active.insert(conn).await?;
    Payroll::try_from(model)
}
