use crate::core::seed;
use crate::models::{Principal, User};

/// Read-only set of shop accounts.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn seeded() -> Self {
        Self {
            users: seed::users(),
        }
    }

    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Sanitized principal of the account matching both fields exactly.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<Principal> {
        self.users
            .iter()
            .find(|u| u.matches(username, password))
            .map(User::principal)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}
