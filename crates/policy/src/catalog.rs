use crate::error::PolicyError;
use rbac_abac_core::{Permission, Role, User};
use std::collections::HashSet;

/// A set of role definitions with unique ids.
///
/// Catalogs only describe roles. Users are built from them on demand and are
/// never stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCatalog {
    roles: Vec<Role>,
}

impl RoleCatalog {
    pub fn new(roles: Vec<Role>) -> Result<Self, PolicyError> {
        let mut seen = HashSet::new();
        for role in &roles {
            if !seen.insert(role.id.as_str()) {
                return Err(PolicyError::DuplicateRole(role.id.clone()));
            }
        }
        Ok(Self { roles })
    }

    /// Built-in `admin`, `moderator`, `author` and `reader` roles.
    pub fn standard() -> Self {
        use Permission::*;

        Self {
            roles: vec![
                Role::new("admin", "Administrator", Permission::ALL.to_vec()),
                Role::new(
                    "moderator",
                    "Moderator",
                    vec![
                        CreatePost,
                        ReadPost,
                        UpdatePost,
                        DeletePost,
                        CreateComment,
                        ReadComment,
                        UpdateComment,
                        DeleteComment,
                        ReadUser,
                        UpdateUser,
                    ],
                ),
                Role::new(
                    "author",
                    "Author",
                    vec![
                        CreatePost,
                        ReadPost,
                        UpdatePost,
                        CreateComment,
                        ReadComment,
                        UpdateComment,
                    ],
                ),
                Role::new(
                    "reader",
                    "Reader",
                    vec![ReadPost, ReadComment, CreateComment],
                ),
            ],
        }
    }

    pub fn role(&self, id: &str) -> Option<&Role> {
        self.roles.iter().find(|role| role.id == id)
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Builds a user holding copies of the named roles, in the given order.
    pub fn user_with_roles(
        &self,
        id: impl Into<String>,
        email: impl Into<String>,
        role_ids: &[&str],
    ) -> Result<User, PolicyError> {
        let roles = role_ids
            .iter()
            .map(|role_id| {
                self.role(role_id)
                    .cloned()
                    .ok_or_else(|| PolicyError::UnknownRole(role_id.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let user = User::new(id, email, roles);
        tracing::debug!("Built user {} with roles {:?}", user.id, role_ids);
        Ok(user)
    }
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_roles() {
        let catalog = RoleCatalog::standard();
        assert_eq!(catalog.len(), 4);

        let admin = catalog.role("admin").unwrap();
        assert!(Permission::ALL.iter().all(|p| admin.grants(*p)));

        let moderator = catalog.role("moderator").unwrap();
        assert!(!moderator.grants(Permission::CreateUser));
        assert!(!moderator.grants(Permission::DeleteUser));
        assert!(moderator.grants(Permission::DeletePost));

        assert!(catalog.role("superuser").is_none());
    }

    #[test]
    fn test_standard_catalog_has_unique_ids() {
        let catalog = RoleCatalog::standard();
        assert!(RoleCatalog::new(catalog.roles().to_vec()).is_ok());
    }

    #[test]
    fn test_duplicate_role_rejected() {
        let roles = vec![
            Role::new("editor", "Editor", vec![Permission::UpdatePost]),
            Role::new("editor", "Other Editor", vec![]),
        ];
        let err = RoleCatalog::new(roles).unwrap_err();
        assert!(matches!(err, PolicyError::DuplicateRole(id) if id == "editor"));
    }

    #[test]
    fn test_same_name_different_id_is_allowed() {
        let roles = vec![
            Role::new("editor-a", "Editor", vec![]),
            Role::new("editor-b", "Editor", vec![]),
        ];
        assert_eq!(RoleCatalog::new(roles).unwrap().len(), 2);
    }

    #[test]
    fn test_catalog_from_custom_roles() {
        let catalog = RoleCatalog::new(vec![
            Role::new(
                "reviewer",
                "Reviewer",
                vec![Permission::ReadPost, Permission::UpdateComment],
            ),
            Role::new("guest", "Guest", vec![]),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert!(catalog.role("guest").unwrap().permissions.is_empty());
        assert!(RoleCatalog::new(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(RoleCatalog::default(), RoleCatalog::standard());
    }

    #[test]
    fn test_user_with_unknown_role() {
        let catalog = RoleCatalog::standard();
        let err = catalog
            .user_with_roles("u", "u@example.com", &["author", "owner"])
            .unwrap_err();
        assert!(matches!(&err, PolicyError::UnknownRole(id) if id.as_str() == "owner"));
        assert_eq!(err.to_string(), "Unknown role: owner");
    }

    #[test]
    fn test_user_with_roles_keeps_order() {
        let catalog = RoleCatalog::standard();
        let user = catalog
            .user_with_roles("u", "u@example.com", &["reader", "author"])
            .unwrap();
        let ids: Vec<&str> = user.roles.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["reader", "author"]);
    }
}
