//! Data model for role-based permission checks.
//!
//! A [`User`] holds zero or more [`Role`]s and each role carries a list of
//! [`Permission`]s. The effective permission set of a user is the union of
//! the permission lists of all its roles.

pub mod error;
pub mod permission;
pub mod role;
pub mod user;

pub use error::ParsePermissionError;
pub use permission::{Action, Permission, Resource};
pub use role::Role;
pub use user::User;
