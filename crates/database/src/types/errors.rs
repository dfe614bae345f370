//! Error types for the database layer

use thiserror::Error;

use crate::validation::ValidationErrors;

/// General database error
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    #[error("Database query error: {0}")]
    QueryError(String),

    #[error("Database migration error: {0}")]
    MigrationError(String),
}

/// Errors raised by movie and actor operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    #[error("Actor not found: {0}")]
    ActorNotFound(String),

    #[error("A movie named '{0}' already exists")]
    NameAlreadyExists(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl CatalogError {
    pub fn movie_not_found(public_id: impl Into<String>) -> Self {
        Self::MovieNotFound(public_id.into())
    }

    pub fn actor_not_found(public_id: impl Into<String>) -> Self {
        Self::ActorNotFound(public_id.into())
    }

    /// Field errors carried by a validation failure, if any.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        Self::DatabaseError(err.to_string())
    }
}

impl From<ValidationErrors> for CatalogError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
