//! Ex-employee service - the archive of departed staff.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::image::accept_jpeg;
use crate::domain::{EmployeeForm, ExEmployee, UploadedImage};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Ex-employee service trait for dependency injection.
#[async_trait]
pub trait ExEmployeeService: Send + Sync {
    /// List archived employees
    async fn list_ex_employees(&self) -> AppResult<Vec<ExEmployee>>;

    /// Create an archive row directly from a form
    async fn create(&self, form: EmployeeForm, image: Option<UploadedImage>)
        -> AppResult<ExEmployee>;

    /// Permanently remove an archive row
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ExEmployeeService using Unit of Work.
pub struct ArchiveManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ArchiveManager<U> {
    /// Create new archive service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ExEmployeeService for ArchiveManager<U> {
    async fn list_ex_employees(&self) -> AppResult<Vec<ExEmployee>> {
        self.uow.ex_employees().list().await
    }

    async fn create(
        &self,
        form: EmployeeForm,
        image: Option<UploadedImage>,
    ) -> AppResult<ExEmployee> {
        form.check_required()?;
        form.check_disease()?;
        let image = accept_jpeg(image)?;
        let exit_date = form.exit_date()?;

        let details = form.into_details(image)?;
        self.uow.ex_employees().create(details, exit_date).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.uow.ex_employees().delete(id).await
    }
}
