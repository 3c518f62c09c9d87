use crate::error::ParsePermissionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Create, Action::Read, Action::Update, Action::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "CREATE",
            Action::Read => "READ",
            Action::Update => "UPDATE",
            Action::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resource {
    Comment,
    Post,
    User,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Comment, Resource::Post, Resource::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Comment => "COMMENT",
            Resource::Post => "POST",
            Resource::User => "USER",
        }
    }
}

/// One allowed action on one resource type.
///
/// Identifiers are opaque: two permissions match only when they are the same
/// variant. `UpdatePost` does not imply `ReadPost`. The derived ordering exists
/// so permissions can live in ordered collections and carries no meaning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    CreateComment,
    ReadComment,
    UpdateComment,
    DeleteComment,
    CreatePost,
    ReadPost,
    UpdatePost,
    DeletePost,
    CreateUser,
    ReadUser,
    UpdateUser,
    DeleteUser,
}

impl Permission {
    pub const ALL: [Permission; 12] = [
        Permission::CreateComment,
        Permission::ReadComment,
        Permission::UpdateComment,
        Permission::DeleteComment,
        Permission::CreatePost,
        Permission::ReadPost,
        Permission::UpdatePost,
        Permission::DeletePost,
        Permission::CreateUser,
        Permission::ReadUser,
        Permission::UpdateUser,
        Permission::DeleteUser,
    ];

    pub fn new(action: Action, resource: Resource) -> Self {
        match (action, resource) {
            (Action::Create, Resource::Comment) => Permission::CreateComment,
            (Action::Read, Resource::Comment) => Permission::ReadComment,
            (Action::Update, Resource::Comment) => Permission::UpdateComment,
            (Action::Delete, Resource::Comment) => Permission::DeleteComment,
            (Action::Create, Resource::Post) => Permission::CreatePost,
            (Action::Read, Resource::Post) => Permission::ReadPost,
            (Action::Update, Resource::Post) => Permission::UpdatePost,
            (Action::Delete, Resource::Post) => Permission::DeletePost,
            (Action::Create, Resource::User) => Permission::CreateUser,
            (Action::Read, Resource::User) => Permission::ReadUser,
            (Action::Update, Resource::User) => Permission::UpdateUser,
            (Action::Delete, Resource::User) => Permission::DeleteUser,
        }
    }

    pub fn action(&self) -> Action {
        match self {
            Permission::CreateComment | Permission::CreatePost | Permission::CreateUser => {
                Action::Create
            }
            Permission::ReadComment | Permission::ReadPost | Permission::ReadUser => Action::Read,
            Permission::UpdateComment | Permission::UpdatePost | Permission::UpdateUser => {
                Action::Update
            }
            Permission::DeleteComment | Permission::DeletePost | Permission::DeleteUser => {
                Action::Delete
            }
        }
    }

    pub fn resource(&self) -> Resource {
        match self {
            Permission::CreateComment
            | Permission::ReadComment
            | Permission::UpdateComment
            | Permission::DeleteComment => Resource::Comment,
            Permission::CreatePost
            | Permission::ReadPost
            | Permission::UpdatePost
            | Permission::DeletePost => Resource::Post,
            Permission::CreateUser
            | Permission::ReadUser
            | Permission::UpdateUser
            | Permission::DeleteUser => Resource::User,
        }
    }

    /// Canonical token, e.g. `"CREATE_POST"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::CreateComment => "CREATE_COMMENT",
            Permission::ReadComment => "READ_COMMENT",
            Permission::UpdateComment => "UPDATE_COMMENT",
            Permission::DeleteComment => "DELETE_COMMENT",
            Permission::CreatePost => "CREATE_POST",
            Permission::ReadPost => "READ_POST",
            Permission::UpdatePost => "UPDATE_POST",
            Permission::DeletePost => "DELETE_POST",
            Permission::CreateUser => "CREATE_USER",
            Permission::ReadUser => "READ_USER",
            Permission::UpdateUser => "UPDATE_USER",
            Permission::DeleteUser => "DELETE_USER",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = ParsePermissionError;

    /// Exact, case-sensitive match on the canonical token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParsePermissionError {
                value: s.to_string(),
            })
    }
}
