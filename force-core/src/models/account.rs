use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credentials handed to the account-creation service on sign-up.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
}

// Keeps the password out of log lines.
impl std::fmt::Debug for SignUpRequest {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// An account created by the account service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_request_debug_hides_password() {
        let request = SignUpRequest {
            email: "ada@example.com".to_string(),
            password: "hunter22".to_string(),
        };

        let rendered = format!("{request:?}");

        assert!(rendered.contains("ada@example.com"));
        assert!(!rendered.contains("hunter22"));
    }
}
