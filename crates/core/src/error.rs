use thiserror::Error;

/// Returned when a token does not name one of the known permissions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown permission: {value}")]
pub struct ParsePermissionError {
    pub value: String,
}
