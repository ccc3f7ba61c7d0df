use serde::{Deserialize, Serialize};

/// Static dashboard login. A plain comparison gate; it protects nothing.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username.eq_ignore_ascii_case(username.trim()) && self.password == password
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "admin@algofordaseat.edu".to_string(),
            password: "admin123".to_string(),
        }
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credentials submitted by the login form.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
