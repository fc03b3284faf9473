//! Employee service - registration, updates, profile lookup and archival.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::domain::image::accept_jpeg;
use crate::domain::{Employee, EmployeeForm, ExEmployee, UploadedImage};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// List all live employees
    async fn list_employees(&self) -> AppResult<Vec<Employee>>;

    /// Fetch one live employee
    async fn get_profile(&self, id: i32) -> AppResult<Employee>;

    /// Validate a registration form and store the new employee
    async fn register(&self, form: EmployeeForm, image: Option<UploadedImage>)
        -> AppResult<Employee>;

    /// Merge a partial form onto the stored employee
    async fn update(
        &self,
        id: i32,
        form: EmployeeForm,
        image: Option<UploadedImage>,
    ) -> AppResult<Employee>;

    /// Move an employee to the archive, stamping the exit date
    async fn archive(&self, id: i32) -> AppResult<ExEmployee>;
}

/// Concrete implementation of EmployeeService using Unit of Work.
pub struct EmployeeManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EmployeeManager<U> {
    /// Create new employee service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> EmployeeService for EmployeeManager<U> {
    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.uow.employees().list().await
    }

    async fn get_profile(&self, id: i32) -> AppResult<Employee> {
        self.uow
            .employees()
            .find_by_id(id)
            .await?
            .ok_or_not_found("User")
    }

    async fn register(
        &self,
        form: EmployeeForm,
        image: Option<UploadedImage>,
    ) -> AppResult<Employee> {
        form.check_required()?;
        form.check_disease()?;
        let image = accept_jpeg(image)?;

        let email = form.email.as_deref().unwrap_or_default();
        if self.uow.employees().find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let details = form.into_details(image)?;
        let employee = self.uow.employees().create(details).await?;
        tracing::info!(id = employee.id, "Employee registered");
        Ok(employee)
    }

    async fn update(
        &self,
        id: i32,
        form: EmployeeForm,
        image: Option<UploadedImage>,
    ) -> AppResult<Employee> {
        // A patch that says Yes must describe the disease itself
        form.check_disease()?;
        let image = accept_jpeg(image)?;
        let existing = self
            .uow
            .employees()
            .find_by_id(id)
            .await?
            .ok_or_not_found("User")?;

        let merged = form.merge(&existing.details, image)?;
        self.uow.employees().update(id, merged).await
    }

    async fn archive(&self, id: i32) -> AppResult<ExEmployee> {
        let archived = self
            .uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let employee = ctx
                        .employees()
                        .find_for_update(id)
                        .await?
                        .ok_or_not_found("User")?;

                    let archived = ctx
                        .ex_employees()
                        .create(employee.details, Utc::now())
                        .await?;
                    ctx.employees().delete(id).await?;
                    Ok(archived)
                })
            })
            .await?;

        tracing::info!(id, archive_id = archived.id, "Employee moved to ex-employees");
        Ok(archived)
    }
}
