use crate::permission::Permission;
use serde::{Deserialize, Serialize};

/// A named bundle of granted permissions.
///
/// `permissions` may contain duplicates. Order and repetition have no effect
/// on evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl Role {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        permissions: Vec<Permission>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            permissions,
        }
    }

    pub fn grants(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}
