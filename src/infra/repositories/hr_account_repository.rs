//! HR account repository.

use async_trait::async_trait;
use std::sync::Arc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::hr_user::{self, ActiveModel, Entity as HrUserEntity};
use crate::domain::HrAccount;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// HR account repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HrAccountRepository: Send + Sync {
    /// List all accounts
    async fn list(&self) -> AppResult<Vec<HrAccount>>;

    /// Find account by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<HrAccount>>;

    /// Create a new account
    async fn create(&self, email: String, password: String) -> AppResult<HrAccount>;

    /// Delete the account with this email
    async fn delete_by_email(&self, email: &str) -> AppResult<()>;
}

/// Concrete implementation of HrAccountRepository
pub struct HrAccountStore {
    db: Arc<DatabaseConnection>,
}

impl HrAccountStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HrAccountRepository for HrAccountStore {
    async fn list(&self) -> AppResult<Vec<HrAccount>> {
        let models = HrUserEntity::find()
            .order_by_asc(hr_user::Column::Email)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(HrAccount::from).collect())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<HrAccount>> {
        let result = HrUserEntity::find()
            .filter(hr_user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await?;

        Ok(result.map(HrAccount::from))
    }

    async fn create(&self, email: String, password: String) -> AppResult<HrAccount> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            email: Set(email),
            password: Set(password),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(HrAccount::from(model))
    }

    async fn delete_by_email(&self, email: &str) -> AppResult<()> {
        let result = HrUserEntity::delete_many()
            .filter(hr_user::Column::Email.eq(email))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("HR/Employer"));
        }
        Ok(())
    }
}
