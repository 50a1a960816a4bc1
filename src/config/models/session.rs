//! Forwarded identity header configuration
//!
//! The authentication proxy in front of the service terminates tokens and
//! forwards the resolved identity as plain headers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionHeaderConfig {
    pub user_id_header: String,
    pub name_header: String,
    pub email_header: String,
    pub role_header: String,
    pub company_header: String,
}

impl Default for SessionHeaderConfig {
    fn default() -> Self {
        Self {
            user_id_header: "x-user-id".to_string(),
            name_header: "x-user-name".to_string(),
            email_header: "x-user-email".to_string(),
            role_header: "x-user-role".to_string(),
            company_header: "x-company-id".to_string(),
        }
    }
}

impl SessionHeaderConfig {
    pub fn names(&self) -> [&str; 5] {
        [
            &self.user_id_header,
            &self.name_header,
            &self.email_header,
            &self.role_header,
            &self.company_header,
        ]
    }
}
