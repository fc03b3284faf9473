//! Live employee repository.

use async_trait::async_trait;
use std::sync::Arc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use crate::domain::{Employee, EmployeeDetails};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find employee by primary key
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>>;

    /// Find employee by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>>;

    /// Find the employee matching both login fields
    async fn find_by_login(&self, email: &str, cnic: &str) -> AppResult<Option<Employee>>;

    /// List all employees, oldest first
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// Insert a new employee
    async fn create(&self, details: EmployeeDetails) -> AppResult<Employee>;

    /// Replace the business fields of an existing employee
    async fn update(&self, id: i32, details: EmployeeDetails) -> AppResult<Employee>;
}

/// Concrete implementation of EmployeeRepository
pub struct EmployeeStore {
    db: Arc<DatabaseConnection>,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>> {
        EmployeeEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .map(Employee::try_from)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        EmployeeEntity::find()
            .filter(employee::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await?
            .map(Employee::try_from)
            .transpose()
    }

    async fn find_by_login(&self, email: &str, cnic: &str) -> AppResult<Option<Employee>> {
        EmployeeEntity::find()
            .filter(employee::Column::Email.eq(email))
            .filter(employee::Column::Cnic.eq(cnic))
            .one(self.db.as_ref())
            .await?
            .map(Employee::try_from)
            .transpose()
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        EmployeeEntity::find()
            .order_by_asc(employee::Column::Id)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(Employee::try_from)
            .collect()
    }

    async fn create(&self, details: EmployeeDetails) -> AppResult<Employee> {
        let now = chrono::Utc::now();
        let mut active = ActiveModel {
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        active.set_details(details);

        let model = active.insert(self.db.as_ref()).await?;
        Employee::try_from(model)
    }

    async fn update(&self, id: i32, details: EmployeeDetails) -> AppResult<Employee> {
        let model = EmployeeEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        let mut active: ActiveModel = model.into();
        active.set_details(details);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(self.db.as_ref()).await?;
        Employee::try_from(model)
    }
}

/// Read an employee and hold a row lock until the surrounding transaction ends.
pub(crate) async fn find_for_update<C>(conn: &C, id: i32) -> AppResult<Option<Employee>>
where
    C: ConnectionTrait,
{
    EmployeeEntity::find_by_id(id)
        .lock_exclusive()
        .one(conn)
        .await?
        .map(Employee::try_from)
        .transpose()
}

/// Remove an employee row.
pub(crate) async fn delete<C>(conn: &C, id: i32) -> AppResult<()>
where
    C: ConnectionTrait,
{
    let result = EmployeeEntity::delete_by_id(id).exec(conn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::not_found("User"));
    }
    Ok(())
}
