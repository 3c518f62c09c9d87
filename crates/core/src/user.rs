use crate::role::Role;
use serde::{Deserialize, Serialize};

/// An entity holding zero or more roles.
///
/// Roles are held by value and may be shared (cloned) between users. A
/// missing `roles` field deserializes to an empty list, which grants nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            roles,
        }
    }

    pub fn without_roles(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self::new(id, email, Vec::new())
    }
}
