//! Authentication service - login dispatch by stakeholder kind.
//!
//! Credentials are compared as stored; there is no session or token. The
//! caller gets back a principal describing who logged in.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::Config;
use crate::domain::{Credentials, Principal};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and return the matching principal
    async fn login(&self, credentials: Credentials) -> AppResult<Principal>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn login(&self, credentials: Credentials) -> AppResult<Principal> {
        let principal = match credentials {
            Credentials::Employee { email, cnic } => self
                .uow
                .employees()
                .find_by_login(&email, &cnic)
                .await?
                .map(Principal::Employee),
            Credentials::Hr { email, password } => self
                .uow
                .hr_accounts()
                .find_by_email(&email)
                .await?
                .filter(|account| account.password_matches(&password))
                .map(|account| Principal::Hr {
                    email: account.email,
                }),
            Credentials::SuperAdmin { password } => self
                .config
                .super_admin_password()
                .filter(|secret| *secret == password)
                .map(|_| Principal::SuperAdmin),
        };

        match principal {
            Some(principal) => Ok(principal),
            None => {
                tracing::warn!("Rejected login attempt");
                Err(AppError::InvalidCredentials)
            }
        }
    }
}
