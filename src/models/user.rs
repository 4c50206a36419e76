use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Owner,
}

/// Authenticated account, as returned by the backend on login/register.
/// The auth token is kept separately in the session context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn is_owner(&self) -> bool {
        self.role == Role::Owner
    }
}
