//! Core error types for the maintenance backend.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, lock poisoning, etc.) are converted to these types by
//! the storage crates.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the maintenance domain.
///
/// Repositories surface [`Error::NotFound`] for missing single-record lookups.
/// Every other backend failure is wrapped with the failing operation's name and
/// propagated unchanged through the service layer.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Classification of an [`Error`], stable across storage backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    Conflict,
    AlreadyExists,
    PreconditionFailed,
    Unauthorized,
    Forbidden,
    Internal,
}

impl Error {
    /// Returns the kind of this error.
    ///
    /// Only `DatabaseError::NotFound` is lifted out of the database family;
    /// any other storage failure is `Internal`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound(_) | Error::Database(DatabaseError::NotFound(_)) => ErrorKind::NotFound,
            Error::Validation(_) => ErrorKind::InvalidInput,
            Error::Conflict(_) => ErrorKind::Conflict,
            Error::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Error::PreconditionFailed(_) => ErrorKind::PreconditionFailed,
            Error::Unauthorized(_) => ErrorKind::Unauthorized,
            Error::Forbidden(_) => ErrorKind::Forbidden,
            Error::Database(_) | Error::Repository(_) | Error::Unexpected(_) => {
                ErrorKind::Internal
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A constraint was violated (unique, foreign key, check).
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The operation did not complete within its time bound.
    #[error("Database operation timed out: {0}")]
    Timeout(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input and stored enum values.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid value '{value}' for {field}")]
    InvalidEnumValue { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_not_found_is_not_found_kind() {
        let err = Error::Database(DatabaseError::NotFound("asset 7".to_string()));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.is_not_found());
    }

    #[test]
    fn test_other_database_errors_are_internal() {
        let cases = [
            DatabaseError::QueryFailed("insert asset: disk I/O error".to_string()),
            DatabaseError::ConstraintViolation("FOREIGN KEY constraint failed".to_string()),
            DatabaseError::Timeout("insert work order".to_string()),
            DatabaseError::ConnectionFailed("unable to open database file".to_string()),
        ];
        for case in cases {
            assert_eq!(Error::Database(case).kind(), ErrorKind::Internal);
        }
    }

    #[test]
    fn test_validation_is_invalid_input() {
        let err: Error =
            ValidationError::InvalidInput("Asset name cannot be empty".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            err.to_string(),
            "Input validation failed: Invalid input: Asset name cannot be empty"
        );
    }
}
