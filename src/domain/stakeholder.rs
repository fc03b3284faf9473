//! Login request parsing and the principal returned on success.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::employee::Employee;
use crate::config::{STAKEHOLDER_EMPLOYEE, STAKEHOLDER_HR, STAKEHOLDER_SUPERADMIN};
use crate::errors::{AppError, AppResult};

/// Login body. Which fields matter depends on `stakeholder`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// One of `employee`, `hr`, `superadmin`
    #[schema(example = "employee")]
    pub stakeholder: Option<String>,
    #[schema(example = "ayesha@example.com")]
    pub email: Option<String>,
    #[schema(example = "35202-1234567-8")]
    pub cnic: Option<String>,
    pub password: Option<String>,
}

/// Credentials after the discriminator has been checked.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Employee { email: String, cnic: String },
    Hr { email: String, password: String },
    SuperAdmin { password: String },
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Employee { email, .. } => {
                f.debug_struct("Employee").field("email", email).finish()
            }
            Credentials::Hr { email, .. } => f.debug_struct("Hr").field("email", email).finish(),
            Credentials::SuperAdmin { .. } => f.write_str("SuperAdmin"),
        }
    }
}

impl TryFrom<LoginRequest> for Credentials {
    type Error = AppError;

    fn try_from(req: LoginRequest) -> AppResult<Self> {
        let present = |v: Option<String>| v.filter(|s| !s.is_empty());
        let email = present(req.email);

        match req.stakeholder.as_deref() {
            Some(STAKEHOLDER_EMPLOYEE) => match (email, present(req.cnic)) {
                (Some(email), Some(cnic)) => Ok(Credentials::Employee { email, cnic }),
                _ => Err(AppError::bad_request(
                    "Email and CNIC are required for employee login",
                )),
            },
            Some(STAKEHOLDER_HR) => match (email, present(req.password)) {
                (Some(email), Some(password)) => Ok(Credentials::Hr { email, password }),
                _ => Err(AppError::bad_request(
                    "Email and password are required for HR login",
                )),
            },
            Some(STAKEHOLDER_SUPERADMIN) => match present(req.password) {
                Some(password) => Ok(Credentials::SuperAdmin { password }),
                None => Err(AppError::bad_request(
                    "Password is required for super admin login",
                )),
            },
            _ => Err(AppError::bad_request("Invalid stakeholder type")),
        }
    }
}

/// Who logged in. Serialized with a `role` tag.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Principal {
    Employee(Employee),
    Hr { email: String },
    SuperAdmin,
}

impl Principal {
    pub fn login_message(&self) -> &'static str {
        match self {
            Principal::Employee(_) => "Employee login successful",
            Principal::Hr { .. } => "HR login successful",
            Principal::SuperAdmin => "Super admin login successful",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(stakeholder: &str) -> LoginRequest {
        LoginRequest {
            stakeholder: Some(stakeholder.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn unknown_stakeholder_is_rejected() {
        let err = Credentials::try_from(request("manager")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid stakeholder type");

        let err = Credentials::try_from(LoginRequest::default()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid stakeholder type");
    }

    #[test]
    fn employee_login_needs_email_and_cnic() {
        let mut req = request("employee");
        req.email = Some("ayesha@example.com".into());
        let err = Credentials::try_from(req.clone()).unwrap_err();
        assert_eq!(err.to_string(), "Email and CNIC are required for employee login");

        req.cnic = Some("35202-1234567-8".into());
        assert!(matches!(
            Credentials::try_from(req).unwrap(),
            Credentials::Employee { .. }
        ));
    }

    #[test]
    fn superadmin_needs_only_a_password() {
        let mut req = request("superadmin");
        req.password = Some("letmein".into());
        assert_eq!(
            Credentials::try_from(req).unwrap(),
            Credentials::SuperAdmin { password: "letmein".into() }
        );
    }

    #[test]
    fn principal_carries_role_tag() {
        let json = serde_json::to_value(Principal::SuperAdmin).unwrap();
        assert_eq!(json, serde_json::json!({"role": "superadmin"}));

        let json = serde_json::to_value(Principal::Hr { email: "hr@example.com".into() }).unwrap();
        assert_eq!(json, serde_json::json!({"role": "hr", "email": "hr@example.com"}));
    }

    #[test]
    fn debug_hides_secrets() {
        let creds = Credentials::Hr {
            email: "hr@example.com".into(),
            password: "hunter22".into(),
        };
        assert!(!format!("{:?}", creds).contains("hunter22"));
    }
}
