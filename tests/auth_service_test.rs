//! Login dispatch tests.

mod common;

use chrono::Utc;
use mockall::predicate::eq;

use common::{sample_employee, TestUnitOfWork};
use hr_payroll_api::config::Config;
use hr_payroll_api::domain::{Credentials, HrAccount, Principal};
use hr_payroll_api::errors::AppError;
use hr_payroll_api::services::{AuthService, Authenticator};

fn hr_account() -> HrAccount {
    HrAccount {
        id: 1,
        email: "hr@example.com".to_string(),
        password: "s3cret".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_employee_login_by_email_and_cnic() {
    let mut uow = TestUnitOfWork::default();
    uow.employees
        .expect_find_by_login()
        .with(eq("ayesha@example.com"), eq("35202-1234567-8"))
        .returning(|_, _| Ok(Some(sample_employee(4))));

    let auth = Authenticator::new(uow.into_arc(), Config::default());
    let principal = auth
        .login(Credentials::Employee {
            email: "ayesha@example.com".to_string(),
            cnic: "35202-1234567-8".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(principal.login_message(), "Employee login successful");
    let json = serde_json::to_value(&principal).unwrap();
    assert_eq!(json["role"], "employee");
    assert_eq!(json["id"], 4);
    assert_eq!(json["email"], "ayesha@example.com");
}

#[tokio::test]
async fn test_employee_login_wrong_cnic() {
    let mut uow = TestUnitOfWork::default();
    uow.employees.expect_find_by_login().returning(|_, _| Ok(None));

    let auth = Authenticator::new(uow.into_arc(), Config::default());
    let err = auth
        .login(Credentials::Employee {
            email: "ayesha@example.com".to_string(),
            cnic: "00000-0000000-0".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_hr_login() {
    let mut uow = TestUnitOfWork::default();
    uow.hr_accounts
        .expect_find_by_email()
        .with(eq("hr@example.com"))
        .returning(|_| Ok(Some(hr_account())));
    let auth = Authenticator::new(uow.into_arc(), Config::default());

    let principal = auth
        .login(Credentials::Hr {
            email: "hr@example.com".to_string(),
            password: "s3cret".to_string(),
        })
        .await
        .unwrap();
    assert!(matches!(principal, Principal::Hr { ref email } if email == "hr@example.com"));

    let err = auth
        .login(Credentials::Hr {
            email: "hr@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_superadmin_login() {
    let config = Config::default().with_super_admin_password("root-pass");
    let auth = Authenticator::new(TestUnitOfWork::default().into_arc(), config);

    let principal = auth
        .login(Credentials::SuperAdmin {
            password: "root-pass".to_string(),
        })
        .await
        .unwrap();
    assert!(matches!(principal, Principal::SuperAdmin));

    let err = auth
        .login(Credentials::SuperAdmin {
            password: "guess".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_superadmin_login_disabled_without_secret() {
    let auth = Authenticator::new(TestUnitOfWork::default().into_arc(), Config::default());

    let err = auth
        .login(Credentials::SuperAdmin {
            password: String::new(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
}
