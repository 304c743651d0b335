//! Storage-specific error types for SQLite operations.
//!
//! This module wraps Diesel and r2d2 errors and converts them to the
//! database-agnostic error types defined in `maintenance_core`.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use maintenance_core::errors::{DatabaseError, Error};
use thiserror::Error;

/// Storage-specific errors that wrap Diesel and r2d2 types.
///
/// These errors are internal to the storage layer and are converted to
/// `maintenance_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    /// The requester stopped waiting before the write committed; the
    /// transaction was rolled back.
    #[error("Write abandoned by requester: {0}")]
    Abandoned(&'static str),

    /// A core error raised inside a writer transaction; passed through as-is.
    #[error(transparent)]
    Core(Error),
}

impl From<Error> for StorageError {
    fn from(err: Error) -> Self {
        StorageError::Core(err)
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::PoolError(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::QueryFailed(e) => diesel_to_core(e, "query"),
            StorageError::Abandoned(operation) => Error::Database(DatabaseError::Timeout(
                format!("{}: rolled back after the requester timed out", operation),
            )),
            StorageError::Core(e) => e,
        }
    }
}

fn diesel_to_core(err: DieselError, operation: &str) -> Error {
    match err {
        DieselError::NotFound => Error::NotFound(operation.to_string()),
        DieselError::DatabaseError(
            kind @ (DatabaseErrorKind::UniqueViolation
            | DatabaseErrorKind::ForeignKeyViolation
            | DatabaseErrorKind::NotNullViolation
            | DatabaseErrorKind::CheckViolation),
            info,
        ) => Error::Database(DatabaseError::ConstraintViolation(format!(
            "{}: {:?}: {}",
            operation,
            kind,
            info.message()
        ))),
        other => Error::Database(DatabaseError::QueryFailed(format!(
            "{}: {}",
            operation, other
        ))),
    }
}

/// Extension trait that converts a Diesel or r2d2 result into a core result,
/// prefixing the error with the name of the failing operation.
///
/// A Diesel `NotFound` becomes `Error::NotFound(operation)`.
pub trait WithOperation<T> {
    fn with_operation(self, operation: &str) -> maintenance_core::Result<T>;
}

impl<T> WithOperation<T> for std::result::Result<T, DieselError> {
    fn with_operation(self, operation: &str) -> maintenance_core::Result<T> {
        self.map_err(|e| diesel_to_core(e, operation))
    }
}

impl<T> WithOperation<T> for std::result::Result<T, r2d2::Error> {
    fn with_operation(self, operation: &str) -> maintenance_core::Result<T> {
        self.map_err(|e| {
            Error::Database(DatabaseError::ConnectionFailed(format!(
                "{}: {}",
                operation, e
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maintenance_core::ErrorKind;

    #[test]
    fn test_not_found_keeps_its_kind() {
        let result: std::result::Result<(), DieselError> = Err(DieselError::NotFound);
        let err = result.with_operation("find asset").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Record not found: find asset");
    }

    #[test]
    fn test_other_failures_carry_operation_context() {
        let result: std::result::Result<(), DieselError> = Err(DieselError::RollbackTransaction);
        let err = result.with_operation("insert work order").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.to_string().contains("insert work order: "));
    }

    #[test]
    fn test_core_error_passes_through_storage_error() {
        let original = Error::NotFound("asset 9".to_string());
        let round_trip: Error = StorageError::from(original).into();
        assert!(round_trip.is_not_found());
    }
}
