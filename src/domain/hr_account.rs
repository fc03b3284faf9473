//! HR staff accounts used for the `hr` login.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// HR account. The password is never serialized.
#[derive(Clone, Serialize)]
pub struct HrAccount {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for HrAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HrAccount")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl HrAccount {
    /// Plaintext comparison, kept for compatibility with existing accounts.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> HrAccount {
        HrAccount {
            id: 1,
            email: "hr@example.com".to_string(),
            password: "hunter22".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn password_is_never_exposed() {
        let account = account();
        assert!(!format!("{:?}", account).contains("hunter22"));
        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn password_match_is_exact() {
        let account = account();
        assert!(account.password_matches("hunter22"));
        assert!(!account.password_matches("Hunter22"));
    }
}
