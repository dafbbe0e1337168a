use crate::modules::content::application::ports::outgoing::RepositoryError;
use crate::modules::content::domain::{PatchError, ValidationError};

//
// ──────────────────────────────────────────────────────────
// Errors shared by every content use case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentError {
    /// Path identifier is not a well-formed store id. Raised before any lookup.
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("limit must be between {min} and {max}, got {value}")]
    InvalidLimit { value: i64, min: i64, max: i64 },

    #[error("Document not found")]
    NotFound,

    #[error("Slug '{0}' is already in use")]
    SlugAlreadyExists(String),

    #[error("Duplicate record: {0}")]
    Duplicate(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<RepositoryError> for ContentError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::DuplicateKey(msg) => ContentError::Duplicate(msg),
            RepositoryError::DatabaseError(msg) => ContentError::RepositoryError(msg),
            RepositoryError::SerializationError(msg) => ContentError::RepositoryError(msg),
        }
    }
}

impl From<PatchError> for ContentError {
    fn from(e: PatchError) -> Self {
        ContentError::RepositoryError(e.to_string())
    }
}
