use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    #[error("Duplicate role id: {0}")]
    DuplicateRole(String),
}
