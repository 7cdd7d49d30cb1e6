use derive_getters::Getters;
use uuid::Uuid;

/// Role of an authenticated user, as reported by the identity service.
/// Any role the dashboard does not know about is treated as [`Role::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Vendor,
    Admin,
    #[serde(other)]
    Other,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Vendor => "vendor",
            Role::Admin => "admin",
            Role::Other => "other",
        }
    }

    pub fn is_vendor(&self) -> bool {
        matches!(self, Role::Vendor)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user resolved by the identity service. Read-only inside the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Getters)]
pub struct User {
    user_id: Uuid,
    role: Role,
}

impl User {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }
}
