//! Database-specific error types and conversions.

use studio_core::error::StudioError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Document (de)serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid filter field `{0}`")]
    InvalidFilter(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },
}

impl From<DbError> for StudioError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => StudioError::NotFound { entity, id },
            DbError::Serialization(e) => StudioError::Serialization(e.to_string()),
            other => StudioError::Database(other.to_string()),
        }
    }
}
