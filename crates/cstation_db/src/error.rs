//! Error types for the database client and repositories

use cstation_common::CStationError;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Errors that can occur when working with the database
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Error with the database configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Error with database URL parsing
    #[error("Database URL error: {0}")]
    UrlError(String),

    /// Error with database pool creation
    #[error("Database pool error: {0}")]
    PoolError(String),

    /// Error with database query
    #[error("Database query error: {0}")]
    QueryError(String),

    /// Error with database transaction
    #[error("Database transaction error: {0}")]
    TransactionError(String),

    /// The target row does not exist
    #[error("{0}")]
    NotFound(String),

    #[error("Duplicate username: {0}")]
    DuplicateUsername(String),

    /// A referenced user or station does not exist
    #[error("{0}")]
    ForeignKeyViolation(String),

    /// Unknown username or wrong password; the two are indistinguishable
    #[error("Invalid username/password")]
    InvalidCredentials,

    /// Usernames are the business key and never change
    #[error("Username cannot be changed")]
    ImmutableUsername,

    #[error("No data to update")]
    NoUpdateFields,

    #[error("Password hashing failed: {0}")]
    HashError(String),
}

/// Whether the error is a UNIQUE or PRIMARY KEY constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => matches!(db_err.kind(), ErrorKind::UniqueViolation),
        _ => false,
    }
}

impl From<DbError> for CStationError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound(message) | DbError::ForeignKeyViolation(message) => {
                CStationError::NotFoundError(message)
            }
            DbError::DuplicateUsername(username) => CStationError::DuplicateUsername(username),
            DbError::InvalidCredentials => {
                CStationError::AuthError("Invalid username/password".to_string())
            }
            e @ (DbError::NoUpdateFields | DbError::ImmutableUsername) => {
                CStationError::ValidationError(e.to_string())
            }
            DbError::HashError(message) => CStationError::InternalError(message),
            other => CStationError::DatabaseError(other.to_string()),
        }
    }
}
