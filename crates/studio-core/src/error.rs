//! Error types for the Studio backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    /// A caller broke the argument contract of an operation (nil tenant
    /// id, nil entity id). Not a business outcome.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StudioError {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

pub type StudioResult<T> = Result<T, StudioError>;
