//! Permission evaluation over role membership.
//!
//! A user holds a permission when at least one of its roles grants it. There
//! is no role inheritance and no implication between permissions.

pub mod catalog;
pub mod error;
pub mod evaluator;

pub use catalog::RoleCatalog;
pub use error::PolicyError;
pub use evaluator::{
    effective_permissions, granting_roles, has_permission, has_permission_named,
    PermissionEvaluator,
};

pub use rbac_abac_core::{Action, ParsePermissionError, Permission, Resource, Role, User};
