use serde::{Deserialize, Serialize};

/// Positive, unique, assigned as max existing + 1.
pub type UserId = i64;

/// A registered user. Rows are appended at registration and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(rename = "UserID")]
    pub user_id: UserId,
    #[serde(rename = "Login")]
    pub login: String,
    /// SHA-256 hex digest or an Argon2 PHC string, never the password.
    #[serde(rename = "PasswordHash")]
    pub password_hash: String,
}

impl UserAccount {
    pub const HEADERS: [&'static str; 3] = ["UserID", "Login", "PasswordHash"];
}
