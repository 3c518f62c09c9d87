use rbac_abac_core::{Permission, Role, User};
use std::collections::BTreeSet;

/// Returns `true` if any of the user's roles grants `permission`.
///
/// Scans role by role and stops at the first match. A user without roles
/// holds nothing.
pub fn has_permission(user: &User, permission: Permission) -> bool {
    let allowed = user.roles.iter().any(|role| role.grants(permission));
    tracing::trace!(user = %user.id, %permission, allowed, "permission check");
    allowed
}

/// String-boundary variant of [`has_permission`].
///
/// A token that does not name a known permission yields `false`.
pub fn has_permission_named(user: &User, permission: &str) -> bool {
    match permission.parse::<Permission>() {
        Ok(permission) => has_permission(user, permission),
        Err(e) => {
            tracing::debug!(user = %user.id, "Rejected permission check: {}", e);
            false
        }
    }
}

/// Deduplicated union of the permissions of every role the user holds.
pub fn effective_permissions(user: &User) -> BTreeSet<Permission> {
    user.roles
        .iter()
        .flat_map(|role| role.permissions.iter().copied())
        .collect()
}

/// Roles of `user` that grant `permission`, in the order the user lists them.
pub fn granting_roles(user: &User, permission: Permission) -> Vec<&Role> {
    user.roles
        .iter()
        .filter(|role| role.grants(permission))
        .collect()
}

/// Stateless handle over the evaluation functions, for callers that want a
/// value to pass around.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionEvaluator;

impl PermissionEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn has_permission(&self, user: &User, permission: Permission) -> bool {
        has_permission(user, permission)
    }

    pub fn has_permission_named(&self, user: &User, permission: &str) -> bool {
        has_permission_named(user, permission)
    }

    pub fn effective_permissions(&self, user: &User) -> BTreeSet<Permission> {
        effective_permissions(user)
    }
}
