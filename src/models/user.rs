use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "pemilik")]
    Owner,
    #[serde(rename = "pegawai")]
    Employee,
}

impl Role {
    /// Stored/display label.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Owner => "pemilik",
            Role::Employee => "pegawai",
        }
    }
}

/// A shop account. The password never leaves this type: it can only be
/// compared, and the type does not serialize.
#[derive(Debug, Clone)]
pub struct User {
    pub id: u32,
    pub username: String,
    password: String,
    pub role: Role,
}

impl User {
    pub fn new(id: u32, username: &str, password: &str, role: Role) -> Self {
        Self {
            id,
            username: username.to_string(),
            password: password.to_string(),
            role,
        }
    }

    /// Exact, case-sensitive match on both fields.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// Identity with the secret stripped.
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.id,
            username: self.username.clone(),
            role: self.role,
        }
    }
}

/// Authenticated identity as held by the session gate and persisted
/// under the session key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: u32,
    pub username: String,
    pub role: Role,
}

impl Principal {
    pub fn is_owner(&self) -> bool {
        self.role == Role::Owner
    }
}
