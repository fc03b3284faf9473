//! Ex-employee (archive) repository.

use async_trait::async_trait;
use std::sync::Arc;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};

use super::entities::ex_employee::{self, ActiveModel, Entity as ExEmployeeEntity};
use crate::domain::{EmployeeDetails, ExEmployee};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Archive repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ExEmployeeRepository: Send + Sync {
    /// List archived employees, most recent exit first
    async fn list(&self) -> AppResult<Vec<ExEmployee>>;

    /// Insert an archive row
    async fn create(&self, details: EmployeeDetails, exit_date: DateTime<Utc>)
        -> AppResult<ExEmployee>;

    /// Permanently remove an archive row
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ExEmployeeRepository
pub struct ExEmployeeStore {
    db: Arc<DatabaseConnection>,
}

impl ExEmployeeStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExEmployeeRepository for ExEmployeeStore {
    async fn list(&self) -> AppResult<Vec<ExEmployee>> {
        ExEmployeeEntity::find()
            .order_by_desc(ex_employee::Column::ExitDate)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(ExEmployee::try_from)
            .collect()
    }

    async fn create(
        &self,
        details: EmployeeDetails,
        exit_date: DateTime<Utc>,
    ) -> AppResult<ExEmployee> {
        insert(self.db.as_ref(), details, exit_date).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = ExEmployeeEntity::delete_by_id(id).exec(self.db.as_ref()).await?;
        if result.rows_affected == 0 {
            return Err(AppError::not_found("Ex-employee"));
        }
        Ok(())
    }
}

/// Insert an archive row on any connection or transaction.
pub(crate) async fn insert<C>(
    conn: &C,
    details: EmployeeDetails,
    exit_date: DateTime<Utc>,
) -> AppResult<ExEmployee>
where
    C: ConnectionTrait,
{
    let mut active = ActiveModel {
        exit_date: Set(exit_date),
        ..Default::default()
    };
    active.set_details(details);

    let model = active.insert(conn).await?;
    ExEmployee::try_from(model)
}
