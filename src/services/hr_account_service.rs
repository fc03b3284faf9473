//! HR account service - accounts used by the `hr` login.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::validation::check_email;
use crate::domain::HrAccount;
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// HR account service trait for dependency injection.
#[async_trait]
pub trait HrAccountService: Send + Sync {
    /// Create an account; emails are unique
    async fn create_account(&self, email: String, password: String) -> AppResult<HrAccount>;

    /// Delete the account with this email
    async fn delete_account(&self, email: &str) -> AppResult<()>;

    /// Emails of every account
    async fn list_emails(&self) -> AppResult<Vec<String>>;
}

/// Concrete implementation of HrAccountService using Unit of Work.
pub struct HrAccountManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> HrAccountManager<U> {
    /// Create new HR account service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> HrAccountService for HrAccountManager<U> {
    async fn create_account(&self, email: String, password: String) -> AppResult<HrAccount> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::validation("Email and password are required"));
        }
        check_email(&email)?;

        if self.uow.hr_accounts().find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("HR email"));
        }

        self.uow.hr_accounts().create(email, password).await
    }

    async fn delete_account(&self, email: &str) -> AppResult<()> {
        if email.is_empty() {
            return Err(AppError::validation("Email is required"));
        }
        self.uow.hr_accounts().delete_by_email(email).await
    }

    async fn list_emails(&self) -> AppResult<Vec<String>> {
        let accounts = self.uow.hr_accounts().list().await?;
        Ok(accounts.into_iter().map(|a| a.email).collect())
    }
}
